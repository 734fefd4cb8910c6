//! Built-in label backends.
//!
//! - `mcs/none`: no labels.
//! - `mcs/user`: label is the job owner's user name.
//! - `mcs/account`: label is the job's account.
//! - `mcs/group`: label is one of the groups listed in the specific parameters.

mod account;
mod group;
mod none;
mod user;

use std::sync::Arc;

use crate::backend::BackendResolver;
use crate::directory::IdentityDirectory;

pub use account::AccountBackend;
pub use group::GroupBackend;
pub use none::NoneBackend;
pub use user::UserBackend;

pub(crate) fn register_builtins(resolver: &BackendResolver, directory: Arc<dyn IdentityDirectory>) {
    resolver.register_fn("none", |_| Ok(Box::new(NoneBackend)));

    let dir = Arc::clone(&directory);
    resolver.register_fn("user", move |_| Ok(Box::new(UserBackend::new(Arc::clone(&dir)))));

    let dir = Arc::clone(&directory);
    resolver.register_fn("account", move |_| {
        Ok(Box::new(AccountBackend::new(Arc::clone(&dir))))
    });

    let dir = directory;
    resolver.register_fn("group", move |init| {
        Ok(Box::new(GroupBackend::from_params(
            Arc::clone(&dir),
            init.params.specific.as_deref(),
        )?))
    });
}
