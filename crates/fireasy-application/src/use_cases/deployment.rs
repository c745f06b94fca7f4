//! Services deployer discovery
//!
//! Collects deployers from the link-time `SERVICE_DEPLOYERS` slice and from
//! explicit registrations, orders them, and runs each one exactly once
//! against a [`ServiceCollection`].
//!
//! Ordering is deterministic: a deployer runs only after everything it
//! `depends_on`; among deployers that are ready, lower `priority` runs
//! first and equal priorities run in name order.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};
use std::sync::Arc;

use fireasy_domain::error::{Error, Result};
use tracing::{debug, info, warn};

use crate::ports::deployer::ServicesDeployer;
use crate::ports::registry::SERVICE_DEPLOYERS;
use crate::services::ServiceCollection;

/// Outcome of a deployment run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentReport {
    /// Deployer names in invocation order
    pub deployed: Vec<String>,
}

/// Discovers and runs services deployers
#[derive(Default, Clone)]
pub struct DeployerDiscovery {
    deployers: Vec<Arc<dyn ServicesDeployer>>,
}

impl DeployerDiscovery {
    /// Create a discovery with no deployers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a discovery holding every link-time registered deployer
    pub fn from_registry() -> Self {
        let mut discovery = Self::new();
        for entry in SERVICE_DEPLOYERS {
            discovery.add(Arc::new(StaticDeployer(entry)));
        }
        debug!(
            deployers = discovery.deployers.len(),
            "Collected link-time deployers"
        );
        discovery
    }

    /// Add a deployer (builder form)
    pub fn with_deployer(mut self, deployer: Arc<dyn ServicesDeployer>) -> Self {
        self.add(deployer);
        self
    }

    /// Add a deployer
    ///
    /// A second deployer with an already known name is ignored.
    pub fn add(&mut self, deployer: Arc<dyn ServicesDeployer>) -> &mut Self {
        if self.deployers.iter().any(|d| d.name() == deployer.name()) {
            warn!(deployer = deployer.name(), "Duplicate deployer ignored");
        } else {
            self.deployers.push(deployer);
        }
        self
    }

    /// Number of collected deployers
    pub fn len(&self) -> usize {
        self.deployers.len()
    }

    /// Whether no deployers were collected
    pub fn is_empty(&self) -> bool {
        self.deployers.is_empty()
    }

    /// Deployers in invocation order
    ///
    /// Fails when a deployer depends on an unknown name or when
    /// dependencies form a cycle.
    pub fn ordered(&self) -> Result<Vec<Arc<dyn ServicesDeployer>>> {
        let index: HashMap<&str, usize> = self
            .deployers
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name(), i))
            .collect();

        let mut pending = vec![0usize; self.deployers.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); self.deployers.len()];
        for (i, deployer) in self.deployers.iter().enumerate() {
            let unique: BTreeSet<&str> = deployer.depends_on().iter().copied().collect();
            for dependency in unique {
                let Some(&d) = index.get(dependency) else {
                    return Err(Error::configuration(format!(
                        "Deployer '{}' depends on unknown deployer '{dependency}'",
                        deployer.name()
                    )));
                };
                pending[i] += 1;
                dependents[d].push(i);
            }
        }

        let rank = |i: usize| Reverse((self.deployers[i].priority(), self.deployers[i].name(), i));
        let mut ready: BinaryHeap<_> = (0..self.deployers.len())
            .filter(|&i| pending[i] == 0)
            .map(rank)
            .collect();

        let mut ordered = Vec::with_capacity(self.deployers.len());
        while let Some(Reverse((_, _, i))) = ready.pop() {
            ordered.push(self.deployers[i].clone());
            for &next in &dependents[i] {
                pending[next] -= 1;
                if pending[next] == 0 {
                    ready.push(rank(next));
                }
            }
        }

        if ordered.len() != self.deployers.len() {
            let mut cyclic: Vec<&str> = (0..self.deployers.len())
                .filter(|&i| pending[i] > 0)
                .map(|i| self.deployers[i].name())
                .collect();
            cyclic.sort_unstable();
            return Err(Error::configuration(format!(
                "Deployer dependency cycle among: {}",
                cyclic.join(", ")
            )));
        }
        Ok(ordered)
    }

    /// Run every deployer once, in order
    pub fn deploy(&self, services: &mut ServiceCollection) -> Result<DeploymentReport> {
        let ordered = self.ordered()?;
        let mut report = DeploymentReport::default();

        for deployer in ordered {
            debug!(deployer = deployer.name(), "Running services deployer");
            deployer.configure(services).map_err(|e| {
                Error::configuration(format!("Deployer '{}' failed: {e}", deployer.name()))
            })?;
            report.deployed.push(deployer.name().to_string());
        }

        info!(
            deployers = report.deployed.len(),
            services = services.len(),
            "Services deployed"
        );
        Ok(report)
    }
}

impl std::fmt::Debug for DeployerDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.deployers.iter().map(|d| d.name()).collect();
        f.debug_struct("DeployerDiscovery")
            .field("deployers", &names)
            .finish()
    }
}

struct StaticDeployer(&'static crate::ports::registry::ServicesDeployerEntry);

impl ServicesDeployer for StaticDeployer {
    fn name(&self) -> &str {
        self.0.name
    }

    fn priority(&self) -> i32 {
        self.0.priority
    }

    fn depends_on(&self) -> &[&'static str] {
        self.0.depends_on
    }

    fn configure(&self, services: &mut ServiceCollection) -> Result<()> {
        (self.0.configure)(services)
    }
}
