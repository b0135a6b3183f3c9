//! Static endpoint registry — one relative path per backend operation.
//!
//! The table is fixed at compile time and injected into the client at
//! construction; nothing mutates it at runtime. Paths are relative URL
//! fragments joined onto the configured base path by the HTTP layer.

/// Authentication and session endpoints (`backend/public`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login: &'static str,
    pub profile: &'static str,
    pub logout: &'static str,
}

/// Authenticated user endpoints (`backend/user`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserEndpoints {
    pub trading: &'static str,
    pub deposits: &'static str,
    pub positions: &'static str,
    pub transactions: &'static str,
}

/// Immutable endpoint table, grouped by backend area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub auth: AuthEndpoints,
    pub user: UserEndpoints,
}

impl Endpoints {
    /// The panel v2 backend layout.
    pub const fn panel_v2() -> Self {
        Self {
            auth: AuthEndpoints {
                login: "/public/login.php",
                profile: "/public/profile.php",
                logout: "/public/logout.php",
            },
            user: UserEndpoints {
                trading: "/user/trading.php",
                deposits: "/user/deposits.php",
                positions: "/user/leverage_trading.php",
                transactions: "/user/transaction_history.php",
            },
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::panel_v2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_is_a_relative_fragment() {
        let e = Endpoints::default();
        let paths = [
            e.auth.login,
            e.auth.profile,
            e.auth.logout,
            e.user.trading,
            e.user.deposits,
            e.user.positions,
            e.user.transactions,
        ];
        for path in paths {
            assert!(path.starts_with('/'), "{path} must start with '/'");
            assert!(!path.contains("://"), "{path} must not be absolute");
        }
    }

    #[test]
    fn test_default_is_panel_v2() {
        assert_eq!(Endpoints::default(), Endpoints::panel_v2());
        assert_eq!(Endpoints::default().user.positions, "/user/leverage_trading.php");
    }
}
