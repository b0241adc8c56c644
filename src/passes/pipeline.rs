use crate::config::types::PassSpec;
use crate::error::Result;
use crate::passes::compiler::CompiledPass;
use std::borrow::Cow;

/// An ordered list of compiled passes.
#[derive(Debug)]
pub struct Pipeline {
	passes: Vec<CompiledPass>,
}

/// Result of running a pipeline over one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
	/// Text after the last pass.
	pub content: String,

	/// Names of the passes that changed the text, in the order they ran.
	pub applied: Vec<String>,
}

impl PipelineOutcome {
	/// True when at least one pass changed the text.
	pub fn changed(&self) -> bool {
		!self.applied.is_empty()
	}
}

impl Pipeline {
	/// Compile every pass description, failing on the first invalid one.
	pub fn compile(specs: &[PassSpec]) -> Result<Self> {
		let passes = specs
			.iter()
			.map(CompiledPass::compile)
			.collect::<Result<Vec<_>>>()?;

		Ok(Pipeline { passes })
	}

	/// Compiled passes, in run order.
	pub fn passes(&self) -> &[CompiledPass] {
		&self.passes
	}

	/// Run each pass over the output of the previous one.
	pub fn apply(&self, input: &str) -> PipelineOutcome {
		let mut content = input.to_string();
		let mut applied = Vec::new();

		for pass in &self.passes {
			let rewritten = match pass.apply(&content) {
				Cow::Borrowed(_) => continue,
				Cow::Owned(text) if text == content => continue,
				Cow::Owned(text) => text,
			};
			content = rewritten;
			applied.push(pass.name.clone());
		}

		PipelineOutcome { content, applied }
	}
}
