use super::prelude::*;

/// Removes a case and cascades to its follows. The follower
/// notification has to be dispatched by the caller *before* this
/// runs, while the followers are still on record.
pub fn delete_case<R>(repo: &R, id: &Id) -> Result<Case>
where
    R: CaseRepo + FollowRepo,
{
    let case = repo.get_case(id)?;
    repo.delete_follows_of(&Followable::Case(case.id.clone()))?;
    repo.delete_case(&case.id)?;
    Ok(case)
}
