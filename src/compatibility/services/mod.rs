mod result_interpreter;

pub use result_interpreter::ResultInterpreter;
