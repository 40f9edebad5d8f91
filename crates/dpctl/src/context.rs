//! Everything a schema operation needs, resolved up front.

use std::path::Path;

use dpctl_config::{DataProduct, Environment, Environments, Invocation};

use crate::{Error, Target};

/// The resolved inputs of one run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub invocation: Invocation,
    pub environment: Environment,
    pub product: DataProduct,
    pub target: Target,
}

impl RunContext {
    /// Resolve the branch, environment and descriptor.
    ///
    /// Validation happens in order (branch, environment file, environment
    /// name and metastore, descriptor) and stops at the first failure.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        environments_path: &Path,
        descriptor_path: &Path,
    ) -> Result<Self, Error> {
        let invocation = Invocation::from_lookup(lookup)?;
        let environment = Environments::load(environments_path)?.select(&invocation.environment)?;
        let product = DataProduct::load(descriptor_path)?;
        let target = Target::for_environment(&product, &environment);

        Ok(Self {
            invocation,
            environment,
            product,
            target,
        })
    }
}
