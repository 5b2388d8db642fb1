mod send_to_json_file;

pub use send_to_json_file::*;
