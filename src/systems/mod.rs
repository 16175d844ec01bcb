#[cfg(feature="system-upgrade_cost_curve")] pub mod upgrade_cost_curve;
#[cfg(feature="system-purchase")]           pub mod purchase;
#[cfg(feature="system-stats")]              pub mod stats;
#[cfg(feature="system-critical")]           pub mod critical;
#[cfg(feature="system-progress")]           pub mod progress;
