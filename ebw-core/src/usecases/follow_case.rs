use super::prelude::*;

pub fn follow_case<R>(repo: &R, follower: &Id, case_id: &Id) -> Result<Follow>
where
    R: FollowRepo + CaseRepo + UserRepo,
{
    repo.get_user(follower).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        err => Error::Repo(err),
    })?;
    let case = repo.get_case(case_id)?;
    let follow = Follow {
        id: Id::new(),
        follower: follower.clone(),
        followable: Followable::Case(case.id),
        created_at: Timestamp::now(),
    };
    repo.create_follow(&follow).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AlreadyFollowing,
        err => Error::Repo(err),
    })?;
    Ok(follow)
}

pub fn unfollow_case<R>(repo: &R, follower: &Id, case_id: &Id) -> Result<()>
where
    R: FollowRepo,
{
    repo.delete_follow(follower, &Followable::Case(case_id.clone()))
        .map_err(|err| match err {
            RepoError::NotFound => Error::NotFollowing,
            err => Error::Repo(err),
        })
}

/// Resolves the users subscribed to a followable. Stale follows whose
/// user has been removed in the meantime are silently skipped.
pub fn followers<R>(repo: &R, followable: &Followable) -> Result<Vec<User>>
where
    R: FollowRepo + UserRepo,
{
    let mut users = Vec::new();
    for id in repo.follower_ids_of(followable)? {
        match repo.get_user(&id) {
            Ok(user) => users.push(user),
            Err(RepoError::NotFound) => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(users)
}
