use std::future::Future;

use futures::StreamExt;
use tokio::task::JoinError;

/// Runs `task` over every item with at most `width` spawned tasks alive at
/// once. Items are admitted in order; results come back in completion order.
///
/// A failing task never stops its siblings: every item is run and every
/// result is returned.
pub async fn for_each_bounded<T, F, Fut, R, E>(
    items: Vec<T>,
    width: usize,
    task: F,
) -> Vec<Result<R, E>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    futures::stream::iter(items)
        .map(|item| tokio::spawn(task(item)))
        .buffer_unordered(width)
        .map(|joined| match joined {
            Ok(result) => result,
            Err(e) => Err(E::from(e)),
        })
        .collect()
        .await
}
