pub mod edit;
pub mod import;
pub mod position;

pub use edit::Edit;
pub use import::{ImportBinding, ImportDeclaration};
pub use position::{Position, SourceSpan};
