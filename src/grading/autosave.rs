//! 防抖自动保存
//!
//! 每个键最多保留一个待执行的保存任务。同一个键再次调度时，旧任务会被中止，
//! 只有空闲窗口内没有新编辑的最后一次调度才会真正执行。

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct AutoSaver<K>
where
    K: Eq + Hash,
{
    idle: Duration,
    generation: AtomicU64,
    pending: Arc<DashMap<K, (u64, JoinHandle<()>)>>,
}

impl<K> AutoSaver<K>
where
    K: Eq + Hash + Clone + Send + Sync + std::fmt::Debug + 'static,
{
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            generation: AtomicU64::new(0),
            pending: Arc::new(DashMap::new()),
        }
    }

    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// 调度一次保存，取代该键上尚未执行的保存
    pub fn schedule<F>(&self, key: K, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let pending = Arc::clone(&self.pending);
        let idle = self.idle;
        let task_key = key.clone();

        let spawn = move || {
            tokio::spawn(async move {
                tokio::time::sleep(idle).await;
                // 开始执行后就不再可被取消
                pending.remove_if(&task_key, |_, (g, _)| *g == generation);
                task.await;
            })
        };

        // 持有分片锁期间登记任务，任务先于登记醒来时会等待这把锁
        match self.pending.entry(key) {
            Entry::Occupied(mut slot) => {
                debug!("Autosave for {:?} superseded", slot.key());
                let (_, previous) = slot.insert((generation, spawn()));
                previous.abort();
            }
            Entry::Vacant(slot) => {
                slot.insert((generation, spawn()));
            }
        }
    }

    /// 取消某个键上待执行的保存，返回是否存在
    pub fn cancel(&self, key: &K) -> bool {
        match self.pending.remove(key) {
            Some((_, (_, handle))) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) {
        self.pending.retain(|_, (_, handle)| {
            handle.abort();
            false
        });
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }
}

impl<K> Drop for AutoSaver<K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        // 界面销毁时不再保存
        self.pending.retain(|_, (_, handle)| {
            handle.abort();
            false
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> std::pin::Pin<Box<dyn Future<Output = ()> + Send>>) {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&saved);
        let make = move |value: &'static str| {
            let sink = Arc::clone(&sink);
            Box::pin(async move {
                sink.lock().unwrap().push(value);
            }) as std::pin::Pin<Box<dyn Future<Output = ()> + Send>>
        };
        (saved, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_idle_window() {
        let saver = AutoSaver::new(Duration::from_millis(1000));
        let (saved, make) = recorder();

        saver.schedule("points", make("95"));
        assert!(saver.is_pending(&"points"));

        sleep(Duration::from_millis(999)).await;
        assert!(saved.lock().unwrap().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*saved.lock().unwrap(), vec!["95"]);
        assert_eq!(saver.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_edit_supersedes_pending_save() {
        let saver = AutoSaver::new(Duration::from_millis(1000));
        let (saved, make) = recorder();

        saver.schedule("points", make("9"));
        sleep(Duration::from_millis(500)).await;
        saver.schedule("points", make("95"));
        sleep(Duration::from_millis(900)).await;
        // 第一次调度原本应在 1000ms 触发
        assert!(saved.lock().unwrap().is_empty());

        sleep(Duration::from_millis(200)).await;
        assert_eq!(*saved.lock().unwrap(), vec!["95"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_distinct_keys_are_independent() {
        let saver = AutoSaver::new(Duration::from_millis(1000));
        let (saved, make) = recorder();

        saver.schedule("points", make("88"));
        saver.schedule("feedback", make("Good work"));
        assert_eq!(saver.pending_count(), 2);

        sleep(Duration::from_millis(1100)).await;
        let mut saved = saved.lock().unwrap().clone();
        saved.sort();
        assert_eq!(saved, vec!["88", "Good work"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_zero_idle_leaves_nothing_pending() {
        let saver = AutoSaver::new(Duration::ZERO);
        let fired = Arc::new(AtomicUsize::new(0));

        for key in 0..200u32 {
            let fired = Arc::clone(&fired);
            saver.schedule(key, async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        for _ in 0..500 {
            if fired.load(Ordering::SeqCst) == 200 {
                break;
            }
            sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(fired.load(Ordering::SeqCst), 200);
        assert_eq!(saver.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let saver = AutoSaver::new(Duration::from_millis(1000));
        let (saved, make) = recorder();

        saver.schedule("points", make("88"));
        assert!(saver.cancel(&"points"));
        assert!(!saver.cancel(&"points"));

        sleep(Duration::from_millis(2000)).await;
        assert!(saved.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_and_drop() {
        let fired = Arc::new(AtomicUsize::new(0));

        let saver = AutoSaver::new(Duration::from_millis(1000));
        for key in ["a", "b"] {
            let fired = Arc::clone(&fired);
            saver.schedule(key, async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        saver.cancel_all();
        assert_eq!(saver.pending_count(), 0);

        let dropped = AutoSaver::new(Duration::from_millis(1000));
        let counter = Arc::clone(&fired);
        dropped.schedule("c", async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(dropped);

        sleep(Duration::from_millis(3000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
