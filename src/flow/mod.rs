pub mod login;
pub mod reserve;
pub mod selectors;

/// The portal pages the flows drive. Paths are a contract with an external
/// system we do not control; they can change without notice.
#[derive(Debug, Clone)]
pub struct PortalEndpoints {
    pub login_url: String,
    pub booking_url: String,
}

impl PortalEndpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        PortalEndpoints {
            login_url: format!("{base}/login"),
            booking_url: format!("{base}/reservas"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_from_base_url() {
        let endpoints = PortalEndpoints::from_base("https://portal.example/app/");
        assert_eq!(endpoints.login_url, "https://portal.example/app/login");
        assert_eq!(endpoints.booking_url, "https://portal.example/app/reservas");
    }
}
