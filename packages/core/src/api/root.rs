use serde_json::{json, Value};

/// Static payload served at `GET /`, listing the endpoint groups under
/// the configured prefix.
pub fn welcome_payload(api_prefix: &str) -> Value {
    json!({
        "message": "Welcome to the livestock health monitoring API",
        "endpoints": {
            "movements": format!("{}/movements", api_prefix),
            "outbreaks": format!("{}/outbreaks", api_prefix),
            "vaccinations": format!("{}/vaccinations", api_prefix),
            "public_stats": format!("{}/public/stats", api_prefix),
            "public_movements": format!("{}/public/movements", api_prefix),
            "public_outbreaks": format!("{}/public/outbreaks", api_prefix),
            "health": "/health",
            "metrics": "/metrics",
        },
        "version": env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_carry_the_prefix() {
        let payload = welcome_payload("/api");
        assert_eq!(payload["endpoints"]["movements"], "/api/movements");
        assert_eq!(payload["endpoints"]["public_stats"], "/api/public/stats");
        assert_eq!(payload["endpoints"]["health"], "/health");
    }

    #[test]
    fn empty_prefix_yields_root_paths() {
        let payload = welcome_payload("");
        assert_eq!(payload["endpoints"]["vaccinations"], "/vaccinations");
    }
}
