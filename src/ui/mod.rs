pub mod dash_scene;
pub mod flashcard_scene;
pub mod game_common;
pub mod memory_scene;
pub mod message_scene;
pub mod start_scene;
