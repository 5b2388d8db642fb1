use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
}

pub fn create_new_user<R>(repo: &R, new_user: NewUser) -> Result<User>
where
    R: UserRepo,
{
    let email: EmailAddress = new_user.email.parse()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        email,
        display_name: new_user.display_name,
        role: Role::User,
    };
    repo.create_user(&user)?;
    Ok(user)
}
