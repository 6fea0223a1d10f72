//! Route guard rules.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Where a blocked visitor is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

impl Redirect {
    pub fn path(self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Home => "/",
        }
    }
}

pub fn check(access: Access, session: Option<&Session>) -> Result<(), Redirect> {
    match (access, session) {
        (Access::Public, _) => Ok(()),
        (_, None) => Err(Redirect::Login),
        (Access::Authenticated, Some(_)) => Ok(()),
        (Access::Admin, Some(s)) if s.is_admin() => Ok(()),
        (Access::Admin, Some(_)) => Err(Redirect::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserInfo};

    fn session(role: Role) -> Session {
        Session::from_login(
            UserInfo {
                id: "u".into(),
                email: "u@example.com".into(),
                name: None,
                role,
            },
            None,
            "t".into(),
        )
    }

    #[test]
    fn anonymous_visitors_go_to_login() {
        assert_eq!(check(Access::Public, None), Ok(()));
        assert_eq!(check(Access::Authenticated, None), Err(Redirect::Login));
        assert_eq!(check(Access::Admin, None), Err(Redirect::Login));
    }

    #[test]
    fn admin_pages_need_admin_role() {
        let customer = session(Role::Customer);
        let admin = session(Role::Admin);
        assert_eq!(check(Access::Authenticated, Some(&customer)), Ok(()));
        assert_eq!(check(Access::Admin, Some(&customer)), Err(Redirect::Home));
        assert_eq!(check(Access::Admin, Some(&admin)), Ok(()));
        assert_eq!(Redirect::Login.path(), "/login");
    }
}
