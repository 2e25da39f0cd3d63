use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::factory::GtfsFile;
use crate::Error;

/// How a view arranges the records of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Every record, in file order
    All,
    /// Records indexed by the value of a field
    ByKey(&'static str),
    /// Records grouped by the value of a field, file order kept inside each group
    Grouped(&'static str),
}

/// Identifies a cached view: the file it is computed from, and its arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub file: GtfsFile,
    pub kind: ViewKind,
}

impl ViewKey {
    pub fn new(file: GtfsFile, kind: ViewKind) -> Self {
        Self { file, kind }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ViewKind::All => write!(f, "{}", self.file),
            ViewKind::ByKey(field) => write!(f, "{} by {}", self.file, field),
            ViewKind::Grouped(field) => write!(f, "{} grouped by {}", self.file, field),
        }
    }
}

type View = Arc<dyn Any + Send + Sync>;

/// Views computed at most once per archive
///
/// A failed computation is not stored, the next request computes it again.
#[derive(Default)]
pub(crate) struct ViewCache {
    views: Mutex<FxHashMap<ViewKey, View>>,
    builds: AtomicUsize,
}

impl ViewCache {
    /// The view stored under `key`, computed by `produce` on the first request
    ///
    /// The lock is held while computing, so concurrent requests for a view wait for the first one.
    pub(crate) fn get_or_compute<V, F>(&self, key: ViewKey, produce: F) -> Result<Arc<V>, Error>
    where
        V: Any + Send + Sync,
        F: FnOnce() -> Result<V, Error>,
    {
        let mut views = self.views.lock();
        let view = match views.get(&key) {
            Some(view) => view.clone(),
            None => {
                let view: View = Arc::new(produce()?);
                self.builds.fetch_add(1, Ordering::Relaxed);
                debug!("Computed the view {}", key);
                views.insert(key, view.clone());
                view
            }
        };
        view.downcast::<V>()
            .map_err(|_| Error::ViewTypeMismatch(key.to_string()))
    }

    /// Number of views computed
    pub(crate) fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Number of views stored
    pub(crate) fn len(&self) -> usize {
        self.views.lock().len()
    }
}
