pub mod prompt_loop_handler;
