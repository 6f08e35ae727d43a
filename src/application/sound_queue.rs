//! Sound dispatch queue and the worker that drains it
//!
//! Any number of producers enqueue sound identifiers; a single worker plays
//! them one at a time in FIFO order. Enqueueing never blocks and the queue
//! has no upper bound.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Notify};
use tracing::{debug, error, info, warn};

use crate::domain::sound::{SoundId, SoundLibrary};

use super::ports::SoundPlayer;

/// Counts sounds that were enqueued but have not finished playing
#[derive(Debug, Default)]
struct Backlog {
    pending: AtomicUsize,
    drained: Notify,
}

impl Backlog {
    fn push(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    fn pop(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.drained.notify_waiters();
        }
    }
}

/// Producer handle for the sound queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SoundQueue {
    tx: mpsc::UnboundedSender<SoundId>,
    backlog: Arc<Backlog>,
}

/// Consumer side of the sound queue. There is exactly one.
#[derive(Debug)]
pub struct SoundReceiver {
    rx: mpsc::UnboundedReceiver<SoundId>,
    backlog: Arc<Backlog>,
}

/// Create a connected queue and receiver
pub fn sound_queue() -> (SoundQueue, SoundReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let backlog = Arc::new(Backlog::default());
    (
        SoundQueue {
            tx,
            backlog: Arc::clone(&backlog),
        },
        SoundReceiver { rx, backlog },
    )
}

impl SoundQueue {
    /// Append a sound to the tail of the queue. Never blocks.
    pub fn enqueue(&self, sound: SoundId) {
        self.backlog.push();
        if let Err(mpsc::error::SendError(sound)) = self.tx.send(sound) {
            self.backlog.pop();
            warn!("Sound worker is gone, dropping sound {}", sound);
        }
    }

    /// Sounds enqueued but not yet played to completion
    pub fn pending(&self) -> usize {
        self.backlog.pending.load(Ordering::SeqCst)
    }

    /// Wait until every enqueued sound has been played
    pub async fn drained(&self) {
        loop {
            let notified = self.backlog.drained.notified();
            if self.pending() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl SoundReceiver {
    /// Wait for the next sound. Returns None once every producer is gone.
    pub async fn recv(&mut self) -> Option<SoundId> {
        self.rx.recv().await
    }

    /// Take the next sound if one is already queued
    #[cfg(test)]
    pub(crate) fn try_recv(&mut self) -> Option<SoundId> {
        self.rx.try_recv().ok()
    }

    /// Mark the most recently received sound as finished
    fn finish(&self) {
        self.backlog.pop();
    }
}

/// The single consumer of the sound queue
pub struct SoundWorker<P: SoundPlayer> {
    player: P,
    library: SoundLibrary,
    receiver: SoundReceiver,
}

impl<P: SoundPlayer> SoundWorker<P> {
    /// Create a worker that plays sounds from `library` through `player`
    pub fn new(player: P, library: SoundLibrary, receiver: SoundReceiver) -> Self {
        Self {
            player,
            library,
            receiver,
        }
    }

    /// Play queued sounds until every producer has been dropped.
    ///
    /// Playback failures are logged and the worker moves on to the next
    /// sound. Nothing is retried.
    pub async fn run(mut self) {
        debug!("Sound worker started");
        while let Some(sound) = self.receiver.recv().await {
            self.play(&sound).await;
            self.receiver.finish();
        }
        info!("Sound queue closed, worker stopping");
    }

    async fn play(&self, sound: &SoundId) {
        let path = self.library.resolve(sound);
        info!("Playing sound {}", path.display());
        match self.player.play(&path).await {
            Ok(()) => debug!(sound = %sound, "Finished playing {}", path.display()),
            Err(e) => error!(sound = %sound, "Playback of {} failed: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PlaybackError;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every played path and the peak number of overlapping plays
    #[derive(Default)]
    struct RecordingPlayer {
        played: Mutex<Vec<PathBuf>>,
        active: AtomicUsize,
        max_active: AtomicUsize,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl SoundPlayer for Arc<RecordingPlayer> {
        async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.played.lock().unwrap().push(path.to_path_buf());
            self.active.fetch_sub(1, Ordering::SeqCst);

            match self.fail_on {
                Some(name) if path.ends_with(name) => Err(PlaybackError::NonZeroExit {
                    status: "exit status: 1".to_string(),
                }),
                _ => Ok(()),
            }
        }
    }

    fn library() -> SoundLibrary {
        SoundLibrary::new("/media")
    }

    #[test]
    fn enqueue_never_blocks_and_counts_backlog() {
        let (queue, mut receiver) = sound_queue();
        for _ in 0..1000 {
            queue.enqueue(SoundId::Press);
        }
        assert_eq!(queue.pending(), 1000);
        assert_eq!(receiver.try_recv(), Some(SoundId::Press));
    }

    #[test]
    fn enqueue_after_worker_dropped_is_harmless() {
        let (queue, receiver) = sound_queue();
        drop(receiver);
        queue.enqueue(SoundId::Open);
        assert_eq!(queue.pending(), 0);
    }

    #[tokio::test]
    async fn plays_in_fifo_order_one_at_a_time() {
        let player = Arc::new(RecordingPlayer::default());
        let (queue, receiver) = sound_queue();
        let worker = SoundWorker::new(Arc::clone(&player), library(), receiver);

        let sounds = [
            SoundId::Press,
            SoundId::Open,
            SoundId::Press,
            SoundId::Error,
            SoundId::Open,
        ];
        for sound in sounds {
            queue.enqueue(sound);
        }

        let handle = tokio::spawn(worker.run());
        queue.drained().await;

        let played = player.played.lock().unwrap().clone();
        let expected: Vec<PathBuf> = sounds.iter().map(|s| library().resolve(s)).collect();
        assert_eq!(played, expected);
        assert_eq!(player.max_active.load(Ordering::SeqCst), 1);

        drop(queue);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn failed_playback_does_not_stop_worker() {
        let player = Arc::new(RecordingPlayer {
            fail_on: Some("press.wav"),
            ..Default::default()
        });
        let (queue, receiver) = sound_queue();
        let handle = tokio::spawn(SoundWorker::new(Arc::clone(&player), library(), receiver).run());

        queue.enqueue(SoundId::Press);
        queue.enqueue(SoundId::Open);
        queue.drained().await;

        let played = player.played.lock().unwrap().clone();
        assert_eq!(
            played,
            vec![PathBuf::from("/media/press.wav"), PathBuf::from("/media/open.wav")]
        );
        assert!(!handle.is_finished());

        drop(queue);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_producers_lose_nothing() {
        let player = Arc::new(RecordingPlayer::default());
        let (queue, receiver) = sound_queue();
        let handle = tokio::spawn(SoundWorker::new(Arc::clone(&player), library(), receiver).run());

        let producers: Vec<_> = (0..8)
            .map(|_| {
                let queue = queue.clone();
                tokio::spawn(async move {
                    for _ in 0..5 {
                        queue.enqueue(SoundId::Press);
                    }
                })
            })
            .collect();
        for producer in producers {
            producer.await.unwrap();
        }
        queue.drained().await;

        assert_eq!(player.played.lock().unwrap().len(), 40);
        assert_eq!(player.max_active.load(Ordering::SeqCst), 1);

        drop(queue);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn drained_returns_immediately_when_empty() {
        let (queue, _receiver) = sound_queue();
        tokio::time::timeout(Duration::from_millis(100), queue.drained())
            .await
            .expect("empty queue should be drained");
    }
}
