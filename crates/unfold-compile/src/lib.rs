pub mod compile;
pub mod result;
pub mod template;

pub use compile::{Compiler, CompileSetupError};
pub use result::{CompilationResult, CompileMetadata};
pub use template::{CompilerConfig, Template, TemplateLibrary};
