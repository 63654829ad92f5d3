use error_stack::{Report, ResultExt};

use application::transfer::{NetworkDto, UserDto};
use kernel::KernelError;

use crate::controller::{Exhaust, TryExhaust};

pub struct RegistrationPresenter;

impl Exhaust<bool> for RegistrationPresenter {
    type To = String;
    fn emit(&self, input: bool) -> Self::To {
        let outcome = if input { "added" } else { "rejected" };
        outcome.to_string()
    }
}

pub struct FollowPresenter;

impl Exhaust<bool> for FollowPresenter {
    type To = String;
    fn emit(&self, input: bool) -> Self::To {
        let outcome = if input { "following" } else { "rejected" };
        outcome.to_string()
    }
}

pub struct FriendshipPresenter;

impl Exhaust<bool> for FriendshipPresenter {
    type To = String;
    fn emit(&self, input: bool) -> Self::To {
        let outcome = if input { "friends" } else { "not friends" };
        outcome.to_string()
    }
}

pub struct UserPresenter;

impl Exhaust<Option<UserDto>> for UserPresenter {
    type To = String;
    fn emit(&self, input: Option<UserDto>) -> Self::To {
        match input {
            Some(UserDto { name, followees }) => {
                let mut rendered = format!("{} -> ", name);
                for followee in followees {
                    rendered.push_str(&followee);
                    rendered.push(' ');
                }
                rendered
            }
            None => "not found".to_string(),
        }
    }
}

/// Prints a user name, or `none` when the query had no answer.
pub struct NamePresenter;

impl Exhaust<Option<String>> for NamePresenter {
    type To = String;
    fn emit(&self, input: Option<String>) -> Self::To {
        input.unwrap_or_else(|| "none".to_string())
    }
}

pub struct NetworkPresenter;

impl Exhaust<String> for NetworkPresenter {
    type To = String;
    fn emit(&self, input: String) -> Self::To {
        input
    }
}

impl Exhaust<usize> for NetworkPresenter {
    type To = String;
    fn emit(&self, input: usize) -> Self::To {
        input.to_string()
    }
}

impl TryExhaust<NetworkDto> for NetworkPresenter {
    type To = String;
    type Error = Report<KernelError>;
    fn emit(&self, input: NetworkDto) -> Result<Self::To, Self::Error> {
        serde_json::to_string_pretty(&input)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to serialize network snapshot")
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{NetworkDto, UserDto};

    use crate::controller::{Exhaust, TryExhaust};
    use crate::response::{NamePresenter, NetworkPresenter, UserPresenter};

    #[test]
    fn present_user() {
        let user = UserDto {
            name: "Foo".to_string(),
            followees: vec!["Bar".to_string(), "Baz".to_string()],
        };
        assert_eq!(UserPresenter.emit(Some(user)), "Foo -> Bar Baz ");
        assert_eq!(UserPresenter.emit(None), "not found");
    }

    #[test]
    fn present_name() {
        assert_eq!(NamePresenter.emit(Some("Foo".to_string())), "Foo");
        assert_eq!(NamePresenter.emit(None), "none");
    }

    #[test]
    fn present_snapshot() {
        let snapshot = NetworkDto {
            capacity: 2,
            users: vec![UserDto {
                name: "Foo".to_string(),
                followees: vec![],
            }],
        };
        let json = TryExhaust::emit(&NetworkPresenter, snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "capacity": 2,
                "users": [{ "name": "Foo", "followees": [] }]
            })
        );
    }
}
