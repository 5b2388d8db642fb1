mod follows;
mod users;

pub mod prelude {
    use std::sync::Mutex;

    pub use ebw_core::{
        entities::*,
        gateways::{
            geocode::GeoCodingGateway,
            notify::{NotificationGateway, UpdateAttribution},
        },
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod db {
        pub use crate::db::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub fn default_new_case() -> usecases::NewCase {
        usecases::NewCase {
            title: "The Title".into(),
            overview: "What happened, at length".into(),
            summary: "What happened, briefly".into(),
            date: Some(Timestamp::now()),
            street: Some("1 State St".into()),
            city: Some("Albany".into()),
            zip: Some("12207".into()),
            state_id: "state-ny".into(),
            subject_ids: vec!["subject-1".into()],
            litigation: None,
            community_action: None,
            avatar_url: None,
            video_url: None,
        }
    }

    pub fn update_from_case(case: &Case) -> usecases::UpdateCase {
        usecases::UpdateCase {
            title: case.title.clone(),
            overview: case.overview.clone(),
            summary: case.summary.clone(),
            date: Some(case.date),
            street: case.location.address.street.clone(),
            city: case.location.address.city.clone(),
            zip: case.location.address.zip.clone(),
            state_id: case.state_id.clone(),
            subject_ids: case.subject_ids.clone(),
            litigation: case.litigation.clone(),
            community_action: case.community_action.clone(),
            avatar_url: case.avatar_url.clone(),
            video_url: case.video_url.clone(),
        }
    }

    /// Resolves every address with a city to the same spot in Albany.
    pub struct DummyGeoGw;

    impl GeoCodingGateway for DummyGeoGw {
        fn resolve_address_lat_lng(&self, addr: &Address) -> Option<(f64, f64)> {
            addr.city.as_ref().map(|_| (42.6526, -73.7562))
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifyGw {
        pub added: Mutex<Vec<(Vec<EmailAddress>, Id)>>,
        pub updated: Mutex<Vec<(Vec<EmailAddress>, Id, UpdateAttribution)>>,
        pub removed: Mutex<Vec<(Vec<EmailAddress>, Id)>>,
        pub registered: Mutex<Vec<User>>,
    }

    impl NotificationGateway for RecordingNotifyGw {
        fn case_added(&self, email_addresses: &[EmailAddress], case: &Case) {
            self.added
                .lock()
                .unwrap()
                .push((email_addresses.to_vec(), case.id.clone()));
        }
        fn case_updated(
            &self,
            email_addresses: &[EmailAddress],
            case: &Case,
            attribution: &UpdateAttribution,
        ) {
            self.updated.lock().unwrap().push((
                email_addresses.to_vec(),
                case.id.clone(),
                attribution.clone(),
            ));
        }
        fn case_removed(&self, email_addresses: &[EmailAddress], case: &Case) {
            self.removed
                .lock()
                .unwrap()
                .push((email_addresses.to_vec(), case.id.clone()));
        }
        fn user_registered(&self, user: &User) {
            self.registered.lock().unwrap().push(user.clone());
        }
    }

    pub struct BackendFixture {
        pub db_connections: db::Connections,
        pub geo: DummyGeoGw,
        pub notify: RecordingNotifyGw,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = db::Connections::default();
            db_connections
                .exclusive()
                .transaction(|conn| {
                    conn.create_state(&State {
                        id: "state-ny".into(),
                        name: "New York".into(),
                        abbreviation: "NY".into(),
                    })?;
                    conn.create_subject(&Subject {
                        id: "subject-1".into(),
                        name: "Excessive force".into(),
                    })?;
                    Ok::<_, usecases::Error>(())
                })
                .unwrap();
            Self {
                db_connections,
                geo: DummyGeoGw,
                notify: RecordingNotifyGw::default(),
            }
        }

        pub fn create_user(&self, email: &str, display_name: &str) -> Id {
            flows::register_user(
                &self.db_connections,
                &self.notify,
                usecases::NewUser {
                    email: email.into(),
                    display_name: display_name.into(),
                },
            )
            .unwrap()
            .id
        }

        pub fn create_case(&self, created_by: Option<&Id>) -> Case {
            flows::create_case(
                &self.db_connections,
                &self.geo,
                &self.notify,
                default_new_case(),
                created_by,
            )
            .unwrap()
        }

        pub fn follow_user(&self, follower: &Id, followed_user: &Id) {
            let follow = Follow {
                id: Id::new(),
                follower: follower.clone(),
                followable: Followable::User(followed_user.clone()),
                created_at: Timestamp::now(),
            };
            self.db_connections
                .exclusive()
                .transaction(|conn| {
                    conn.create_follow(&follow)
                        .map_err(usecases::Error::from)
                })
                .unwrap();
        }
    }
}
