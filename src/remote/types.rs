use futures::future::Future;

use super::error::Error;

/// Remote collaborator Future
pub type RemoteFuture<T> = Box<Future<Item = T, Error = Error>>;
