pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::case_builder::*;

pub mod case_builder {

    use super::*;
    use crate::{case::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CaseBuild {
        case: Case,
    }

    impl CaseBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.case.id = id.into();
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.case.slug = slug.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.case.title = title.into();
            self
        }
        pub fn overview(mut self, overview: &str) -> Self {
            self.case.overview = overview.into();
            self
        }
        pub fn summary(mut self, summary: &str) -> Self {
            self.case.summary = summary.into();
            self
        }
        pub fn date(mut self, date: Timestamp) -> Self {
            self.case.date = date;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.case.location.address.city = Some(city.into());
            self
        }
        pub fn street(mut self, street: &str) -> Self {
            self.case.location.address.street = Some(street.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.case.location.pos = Some(pos);
            self
        }
        pub fn state_id(mut self, state_id: &str) -> Self {
            self.case.state_id = state_id.into();
            self
        }
        pub fn subject_ids(mut self, subject_ids: Vec<impl Into<Id>>) -> Self {
            self.case.subject_ids = subject_ids.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.case.created_at = created_at;
            self
        }
        pub fn updated_at(mut self, updated_at: Timestamp) -> Self {
            self.case.updated_at = updated_at;
            self
        }
        pub fn finish(self) -> Case {
            self.case
        }
    }

    impl Builder for Case {
        type Build = CaseBuild;
        fn build() -> Self::Build {
            let now = Timestamp::now();
            Self::Build {
                case: Case {
                    id: Id::new(),
                    slug: "".into(),
                    title: "".into(),
                    overview: "".into(),
                    summary: "".into(),
                    date: now,
                    location: Default::default(),
                    state_id: Id::new(),
                    subject_ids: vec![Id::new()],
                    litigation: None,
                    community_action: None,
                    avatar_url: None,
                    video_url: None,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
