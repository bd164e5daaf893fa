//! Compiled-in credential allow-list.
//!
//! Demo and support accounts ship with the platform and are checked
//! before the remote store is ever consulted. Lookups are exact-match;
//! passwords are plaintext by design (see the password module).

use chrono::{DateTime, TimeZone, Utc};

use constructia_entity::user::{
    AccountStatus, AdminRole, AdminUser, ClientUser, DEFAULT_AVAILABLE_TOKENS,
    DEFAULT_MONTHLY_ALLOWANCE, DEFAULT_STORAGE_LIMIT_GB,
};

/// A compiled-in client credential with its full profile.
#[derive(Debug, Clone)]
pub struct ClientEntry {
    /// Login email, matched exactly.
    pub email: &'static str,
    /// Expected password, compared exactly.
    pub password: &'static str,
    /// The profile returned on a match.
    pub profile: ClientUser,
}

/// A compiled-in admin credential.
#[derive(Debug, Clone, Copy)]
pub struct AdminEntry {
    /// Login username, matched exactly.
    pub username: &'static str,
    /// Expected password, compared exactly.
    pub password: &'static str,
}

/// The compiled-in credential table.
#[derive(Debug, Clone)]
pub struct AllowList {
    clients: Vec<ClientEntry>,
    admins: Vec<AdminEntry>,
}

impl AllowList {
    /// The allow-list shipped with the platform.
    pub fn builtin() -> Self {
        Self {
            clients: vec![
                ClientEntry {
                    email: "cliente@test.com",
                    password: "password123",
                    profile: client_profile(
                        "test-client-001",
                        "Cliente de Prueba",
                        "cliente@test.com",
                        "Construcciones Test S.L.",
                        "professional",
                    ),
                },
                ClientEntry {
                    email: "demo@constructia.com",
                    password: "demo2024",
                    profile: client_profile(
                        "demo-client-001",
                        "Cuenta Demo",
                        "demo@constructia.com",
                        "ConstructIA Demo",
                        "enterprise",
                    ),
                },
            ],
            admins: vec![
                AdminEntry {
                    username: "superadmin",
                    password: "super2024!",
                },
                AdminEntry {
                    username: "admin",
                    password: "admin2024!",
                },
                AdminEntry {
                    username: "gestor",
                    password: "gestor2024!",
                },
            ],
        }
    }

    /// Look up a client entry by exact email.
    pub fn find_client(&self, email: &str) -> Option<&ClientEntry> {
        self.clients.iter().find(|entry| entry.email == email)
    }

    /// Look up an admin entry by exact username.
    pub fn find_admin(&self, username: &str) -> Option<&AdminEntry> {
        self.admins.iter().find(|entry| entry.username == username)
    }

    /// Build the profile for a recognized admin username.
    ///
    /// The role is derived from the username: `superadmin` gets the
    /// superadmin role with the `all` permission, every other
    /// recognized username gets the regular admin role.
    pub fn admin_profile(&self, username: &str) -> AdminUser {
        let role = if username == "superadmin" {
            AdminRole::Superadmin
        } else {
            AdminRole::Admin
        };

        AdminUser {
            id: format!("admin-{username}"),
            username: username.to_string(),
            email: format!("{username}@constructia.com"),
            role,
            permissions: role.default_permissions(),
            name: display_name(username),
            status: AccountStatus::Active,
            last_login: Some(Utc::now()),
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::builtin()
    }
}

fn client_profile(
    id: &str,
    name: &str,
    email: &str,
    company: &str,
    plan: &str,
) -> ClientUser {
    ClientUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
        status: AccountStatus::Active,
        subscription_plan: plan.to_string(),
        subscription_status: "active".to_string(),
        available_tokens: DEFAULT_AVAILABLE_TOKENS,
        monthly_allowance: DEFAULT_MONTHLY_ALLOWANCE,
        storage_limit_gb: DEFAULT_STORAGE_LIMIT_GB,
        created_at: demo_epoch(),
    }
}

fn display_name(username: &str) -> String {
    let mut chars = username.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Fixed creation date for the demo profiles.
fn demo_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_lookup_is_exact() {
        let list = AllowList::builtin();
        assert!(list.find_client("cliente@test.com").is_some());
        assert!(list.find_client("CLIENTE@TEST.COM").is_none());
        assert!(list.find_client("cliente@test.co").is_none());
    }

    #[test]
    fn test_demo_profile_has_known_id_and_tokens() {
        let list = AllowList::builtin();
        let entry = list.find_client("cliente@test.com").unwrap();
        assert_eq!(entry.profile.id, "test-client-001");
        assert_eq!(entry.profile.available_tokens, 5000);
    }

    #[test]
    fn test_superadmin_role_derivation() {
        let list = AllowList::builtin();
        let profile = list.admin_profile("superadmin");
        assert_eq!(profile.role, AdminRole::Superadmin);
        assert_eq!(profile.permissions, vec!["all"]);

        let profile = list.admin_profile("gestor");
        assert_eq!(profile.role, AdminRole::Admin);
        assert!(profile.permissions.contains(&"manage_clients".to_string()));
    }
}
