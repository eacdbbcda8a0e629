//! Process invocation arguments
//!
//! Arguments are captured once at the program entry point and handed to
//! whoever needs them, so library code never reads process globals.

/// Invocation arguments, program name first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    args: Vec<String>,
}

impl InvocationArgs {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Capture the current process arguments (lossy UTF-8)
    ///
    /// Only the binary entry point should call this.
    pub fn from_env() -> Self {
        let args = std::env::args_os()
            .map(|arg| arg.to_string_lossy().to_string())
            .collect();
        Self { args }
    }

    /// Arguments exactly as given, program name at index 0
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn program_name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl From<Vec<String>> for InvocationArgs {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}
