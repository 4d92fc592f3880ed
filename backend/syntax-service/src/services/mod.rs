mod resolver;

pub use resolver::SyntaxResolver;
