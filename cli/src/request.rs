use std::str::FromStr;

use application::transfer::{
    CreateUserDto, FollowUserDto, FriendshipDto, GetUserDto, RecommendUserDto,
};

use crate::controller::Intake;

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum RequestError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects {expected} argument(s), got {actual}")]
    Arity {
        command: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Eq, PartialEq)]
pub enum Request {
    AddUser(AddUserRequest),
    Follow(FollowRequest),
    GetUser(GetUserRequest),
    Recommend(RecommendRequest),
    Friends(FriendsRequest),
    Count,
    Capacity,
    Popular,
    Show,
    Json,
}

#[derive(Debug, Eq, PartialEq)]
pub struct AddUserRequest {
    name: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct FollowRequest {
    follower: String,
    followee: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct GetUserRequest {
    name: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct RecommendRequest {
    name: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct FriendsRequest {
    name1: String,
    name2: String,
}

impl Request {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, RequestError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

fn arguments<const N: usize>(
    command: &'static str,
    args: &[&str],
) -> Result<[String; N], RequestError> {
    if args.len() != N {
        return Err(RequestError::Arity {
            command,
            expected: N,
            actual: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

impl FromStr for Request {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args = words.collect::<Vec<_>>();
        match command {
            "add" => {
                let [name] = arguments::<1>("add", &args)?;
                Ok(Self::AddUser(AddUserRequest { name }))
            }
            "follow" => {
                let [follower, followee] = arguments::<2>("follow", &args)?;
                Ok(Self::Follow(FollowRequest { follower, followee }))
            }
            "user" => {
                let [name] = arguments::<1>("user", &args)?;
                Ok(Self::GetUser(GetUserRequest { name }))
            }
            "recommend" => {
                let [name] = arguments::<1>("recommend", &args)?;
                Ok(Self::Recommend(RecommendRequest { name }))
            }
            "friends" => {
                let [name1, name2] = arguments::<2>("friends", &args)?;
                Ok(Self::Friends(FriendsRequest { name1, name2 }))
            }
            "count" => arguments::<0>("count", &args).map(|_| Self::Count),
            "capacity" => arguments::<0>("capacity", &args).map(|_| Self::Capacity),
            "popular" => arguments::<0>("popular", &args).map(|_| Self::Popular),
            "show" => arguments::<0>("show", &args).map(|_| Self::Show),
            "json" => arguments::<0>("json", &args).map(|_| Self::Json),
            other => Err(RequestError::Unknown(other.to_string())),
        }
    }
}

pub struct UserTransformer;

impl Intake<AddUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, input: AddUserRequest) -> Self::To {
        CreateUserDto { name: input.name }
    }
}

impl Intake<FollowRequest> for UserTransformer {
    type To = FollowUserDto;
    fn emit(&self, input: FollowRequest) -> Self::To {
        FollowUserDto {
            follower: input.follower,
            followee: input.followee,
        }
    }
}

impl Intake<GetUserRequest> for UserTransformer {
    type To = GetUserDto;
    fn emit(&self, input: GetUserRequest) -> Self::To {
        GetUserDto { name: input.name }
    }
}

pub struct NetworkTransformer;

impl Intake<RecommendRequest> for NetworkTransformer {
    type To = RecommendUserDto;
    fn emit(&self, input: RecommendRequest) -> Self::To {
        RecommendUserDto { name: input.name }
    }
}

impl Intake<FriendsRequest> for NetworkTransformer {
    type To = FriendshipDto;
    fn emit(&self, input: FriendsRequest) -> Self::To {
        FriendshipDto {
            name1: input.name1,
            name2: input.name2,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::request::{
        AddUserRequest, FollowRequest, FriendsRequest, RecommendRequest, Request, RequestError,
    };

    #[test]
    fn parse_commands() {
        assert_eq!(
            Request::parse_line("add Foo"),
            Ok(Some(Request::AddUser(AddUserRequest {
                name: "Foo".to_string()
            })))
        );
        assert_eq!(
            Request::parse_line("  follow   Foo Bar "),
            Ok(Some(Request::Follow(FollowRequest {
                follower: "Foo".to_string(),
                followee: "Bar".to_string(),
            })))
        );
        assert_eq!(
            Request::parse_line("recommend Foo"),
            Ok(Some(Request::Recommend(RecommendRequest {
                name: "Foo".to_string()
            })))
        );
        assert_eq!(
            Request::parse_line("friends Foo Bar"),
            Ok(Some(Request::Friends(FriendsRequest {
                name1: "Foo".to_string(),
                name2: "Bar".to_string(),
            })))
        );
        assert_eq!(Request::parse_line("capacity"), Ok(Some(Request::Capacity)));
        assert_eq!(Request::parse_line("popular"), Ok(Some(Request::Popular)));
        assert_eq!(Request::parse_line("show"), Ok(Some(Request::Show)));
    }

    #[test]
    fn skip_blank_and_comments() {
        assert_eq!(Request::parse_line(""), Ok(None));
        assert_eq!(Request::parse_line("   "), Ok(None));
        assert_eq!(Request::parse_line("# add Foo"), Ok(None));
    }

    #[test]
    fn reject_malformed() {
        assert_eq!(
            Request::parse_line("befriend Foo"),
            Err(RequestError::Unknown("befriend".to_string()))
        );
        assert_eq!(
            Request::parse_line("follow Foo"),
            Err(RequestError::Arity {
                command: "follow",
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            Request::parse_line("count 3"),
            Err(RequestError::Arity {
                command: "count",
                expected: 0,
                actual: 1,
            })
        );
    }
}
