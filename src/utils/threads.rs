use std::future::Future;

use futures::{StreamExt, stream};

/// 以受限并发执行一组Future，按提交顺序返回结果。
pub async fn do_parallel_with_limit<F, T>(tasks: Vec<F>, max_parallels: usize) -> Vec<T>
where
    F: Future<Output = T>,
{
    stream::iter(tasks)
        .buffered(max_parallels.max(1))
        .collect()
        .await
}
