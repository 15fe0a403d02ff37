pub mod build;
pub mod credentials;
pub mod error;
pub mod function;
pub mod invoke;
pub mod registry;

pub use build::build_function;
pub use credentials::Credentials;
pub use error::{BuildError, ImportError, InvokeError};
pub use function::{ArgLocation, Function, HttpMethod, InvocationPlan, ToolDefinition};
pub use invoke::RestInvoker;
pub use registry::{FunctionRegistry, RegistryBuilder};
