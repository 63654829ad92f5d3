use application::service::{
    AddUserService, FollowUserService, FriendshipService, GetUserService, PopularUserService,
    RecommendUserService, RenderNetworkService,
};
use kernel::KernelError;

use crate::controller::Controller;
use crate::handler::AppModule;
use crate::request::{NetworkTransformer, Request, UserTransformer};
use crate::response::{
    FollowPresenter, FriendshipPresenter, NamePresenter, NetworkPresenter, RegistrationPresenter,
    UserPresenter,
};

pub async fn route(app: &AppModule, request: Request) -> error_stack::Result<String, KernelError> {
    match request {
        Request::AddUser(req) => {
            Controller::new(UserTransformer, RegistrationPresenter)
                .intake(req)
                .handle(|dto| app.add_user(dto))
                .await
        }
        Request::Follow(req) => {
            Controller::new(UserTransformer, FollowPresenter)
                .intake(req)
                .handle(|dto| app.follow_user(dto))
                .await
        }
        Request::GetUser(req) => {
            Controller::new(UserTransformer, UserPresenter)
                .intake(req)
                .handle(|dto| app.get_user(dto))
                .await
        }
        Request::Recommend(req) => {
            Controller::new(NetworkTransformer, NamePresenter)
                .intake(req)
                .handle(|dto| app.recommend_who_to_follow(dto))
                .await
        }
        Request::Friends(req) => {
            Controller::new(NetworkTransformer, FriendshipPresenter)
                .intake(req)
                .handle(|dto| app.are_friends(dto))
                .await
        }
        Request::Popular => {
            Controller::new((), NamePresenter)
                .bypass(|| app.most_popular_user())
                .await
        }
        Request::Count => {
            Controller::new((), NetworkPresenter)
                .bypass(|| app.user_count())
                .await
        }
        Request::Capacity => {
            Controller::new((), NetworkPresenter)
                .bypass(|| app.capacity())
                .await
        }
        Request::Show => {
            Controller::new((), NetworkPresenter)
                .bypass(|| app.render_network())
                .await
        }
        Request::Json => {
            Controller::new((), NetworkPresenter)
                .try_bypass(|| app.network_snapshot())
                .await
        }
    }
}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::prelude::config::NetworkConfig;
    use kernel::prelude::entity::NetworkCapacity;
    use kernel::KernelError;

    use crate::handler::AppModule;
    use crate::request::Request;
    use crate::route::route;

    async fn run(app: &AppModule, line: &str) -> error_stack::Result<String, KernelError> {
        let request = Request::parse_line(line)
            .expect("valid line")
            .expect("not a comment");
        route(app, request).await
    }

    #[tokio::test]
    async fn scripted_session() -> error_stack::Result<(), KernelError> {
        let config =
            NetworkConfig::default().reconstruct(|c| c.max_users = NetworkCapacity::new(3));
        let app = AppModule::with_database(InMemoryDatabase::with_config(&config));

        assert_eq!(run(&app, "popular").await?, "none");
        assert_eq!(run(&app, "show").await?, "Network:");
        assert_eq!(run(&app, "add Foo").await?, "added");
        assert_eq!(run(&app, "add Bar").await?, "added");
        assert_eq!(run(&app, "add Bar").await?, "rejected");
        assert_eq!(run(&app, "add Baz").await?, "added");
        assert_eq!(run(&app, "add Qux").await?, "rejected");
        assert_eq!(run(&app, "count").await?, "3");
        assert_eq!(run(&app, "capacity").await?, "3");

        assert_eq!(run(&app, "follow Bar Foo").await?, "following");
        assert_eq!(run(&app, "follow Baz Foo").await?, "following");
        assert_eq!(run(&app, "follow Baz Foo").await?, "rejected");
        assert_eq!(run(&app, "follow Foo Foo").await?, "rejected");
        assert_eq!(run(&app, "follow Foo Qux").await?, "rejected");

        assert_eq!(run(&app, "friends Bar Foo").await?, "not friends");
        assert_eq!(run(&app, "follow Foo Bar").await?, "following");
        assert_eq!(run(&app, "friends Bar Foo").await?, "friends");
        assert_eq!(run(&app, "user Baz").await?, "Baz -> Foo ");
        assert_eq!(run(&app, "user Qux").await?, "not found");
        assert_eq!(run(&app, "popular").await?, "Foo");
        assert_eq!(run(&app, "recommend Bar").await?, "Baz");
        assert_eq!(run(&app, "recommend Qux").await?, "none");
        assert_eq!(
            run(&app, "show").await?,
            "Network:\nFoo -> Bar \nBar -> Foo \nBaz -> Foo "
        );

        let json: serde_json::Value = serde_json::from_str(&run(&app, "json").await?)
            .expect("json output");
        assert_eq!(json["capacity"], 3);
        assert_eq!(json["users"][1]["followees"][0], "Foo");
        Ok(())
    }
}
