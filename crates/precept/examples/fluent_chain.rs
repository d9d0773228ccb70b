//! Fluent chained checks: one value/name pair, several constraints.
//!
//! Run with: `cargo run --example fluent_chain`

use precept::prelude::*;

fn reserve_port(port: Option<u16>) -> GuardResult<u16> {
    let guard = Guard::from_option(port, Some("port"))
        .is_not_null()?
        .requires(|v| v.is_some_and(|&p| p >= 1024), Some("Argument '{0}' must be unprivileged, got '{1}'."))?
        .requires(|v| v.is_some_and(|&p| p != 8443), Some("Argument '{0}' clashes with the TLS listener."))?;

    Ok(guard.into_value().expect("is_not_null ran"))
}

fn main() {
    println!("reserved: {:?}", reserve_port(Some(8080)));

    for (label, port) in [("absent", None), ("privileged", Some(80)), ("clashing", Some(8443))] {
        println!("{label}: {}", reserve_port(port).unwrap_err());
    }
}
