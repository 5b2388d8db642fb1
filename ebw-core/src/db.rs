use crate::repositories::*;

/// Everything the application flows need from a backing store.
pub trait Db:
    CaseRepo + CaseRevisionRepo + FollowRepo + UserRepo + StateRepo + SubjectRepo
{
}

impl<T> Db for T where
    T: CaseRepo + CaseRevisionRepo + FollowRepo + UserRepo + StateRepo + SubjectRepo
{
}
