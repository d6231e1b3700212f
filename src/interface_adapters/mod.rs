// Interface adapters: motion input, engine audio and the JSON-lines wire format.

pub mod audio;
pub mod motion;
pub mod protocol;
pub mod trace;
