pub mod conversation_controller;
