//! Page-view sessions and their store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::deferred::DeferredQueue;
use crate::assistant::{Language, Message};
use crate::contact::ContactState;
use crate::events::SiteEvent;
use crate::symptoms::SymptomSelection;

/// Buffered events per session before slow subscribers start lagging.
const EVENT_CAPACITY: usize = 64;

/// Chat widget state.
#[derive(Debug, Clone)]
pub struct ChatState {
    messages: Vec<Message>,
    language: Language,
    pending: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![Message::greeting()],
            language: Language::default(),
            pending: 0,
        }
    }
}

impl ChatState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the loading indicator should be visible.
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }
}

/// State of one rendered page.
///
/// Cloning is cheap; all clones share the same state. Dropping the last
/// clone, or removing the session from its store, cancels any deferred
/// work that has not run yet.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    id: String,
    created_at: DateTime<Utc>,
    last_activity: RwLock<DateTime<Utc>>,
    chat: RwLock<ChatState>,
    symptoms: RwLock<SymptomSelection>,
    contact: RwLock<ContactState>,
    events: broadcast::Sender<SiteEvent>,
    deferred: DeferredQueue,
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        self.deferred.cancel();
    }
}

impl Session {
    /// Spawns the deferred worker, so a Tokio runtime must be running.
    fn new(id: String) -> Self {
        let now = Utc::now();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(SessionInner {
                id,
                created_at: now,
                last_activity: RwLock::new(now),
                chat: RwLock::new(ChatState::default()),
                symptoms: RwLock::new(SymptomSelection::new()),
                contact: RwLock::new(ContactState::default()),
                events,
                deferred: DeferredQueue::spawn(),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    // ── chat ────────────────────────────────────────────────────────────

    /// Snapshot of the chat state.
    pub fn chat(&self) -> ChatState {
        self.inner.chat.read().unwrap().clone()
    }

    /// Append a message and return a copy of it.
    pub fn push_message(&self, message: Message) -> Message {
        let mut guard = self.inner.chat.write().unwrap();
        guard.messages.push(message.clone());
        drop(guard);
        self.touch();
        message
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.chat.read().unwrap().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.inner.chat.read().unwrap().messages.len()
    }

    pub fn language(&self) -> Language {
        self.inner.chat.read().unwrap().language
    }

    pub fn set_language(&self, language: Language) {
        self.inner.chat.write().unwrap().language = language;
        self.touch();
    }

    /// Mark one more reply as outstanding.
    pub fn begin_reply(&self) {
        self.inner.chat.write().unwrap().pending += 1;
    }

    /// Mark one reply as delivered. Returns `true` when none remain.
    pub fn finish_reply(&self) -> bool {
        let mut guard = self.inner.chat.write().unwrap();
        guard.pending = guard.pending.saturating_sub(1);
        guard.pending == 0
    }

    pub fn is_reply_pending(&self) -> bool {
        self.inner.chat.read().unwrap().is_pending()
    }

    // ── symptoms ────────────────────────────────────────────────────────

    /// Run `f` against the symptom selection.
    pub fn with_symptoms<R>(&self, f: impl FnOnce(&mut SymptomSelection) -> R) -> R {
        let mut guard = self.inner.symptoms.write().unwrap();
        let result = f(&mut guard);
        drop(guard);
        self.touch();
        result
    }

    pub fn symptoms(&self) -> SymptomSelection {
        self.inner.symptoms.read().unwrap().clone()
    }

    // ── contact ─────────────────────────────────────────────────────────

    /// Run `f` against the contact form state.
    pub fn with_contact<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> R {
        let mut guard = self.inner.contact.write().unwrap();
        let result = f(&mut guard);
        drop(guard);
        self.touch();
        result
    }

    pub fn contact(&self) -> ContactState {
        self.inner.contact.read().unwrap().clone()
    }

    // ── events & deferred work ──────────────────────────────────────────

    /// Publish an event to every open event stream of this page.
    pub fn emit(&self, event: SiteEvent) {
        // No subscribers is normal before the page opens its stream.
        let _ = self.inner.events.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.inner.events.subscribe()
    }

    /// Run `job` once after `delay`, unless the session goes away first.
    pub fn defer(&self, delay: Duration, job: impl FnOnce() + Send + 'static) -> bool {
        self.inner.deferred.schedule(delay, job)
    }

    /// Cancel deferred work. Jobs that have not run are discarded.
    pub fn close(&self) {
        self.inner.deferred.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.deferred.is_cancelled()
    }

    // ── lifetime ────────────────────────────────────────────────────────

    fn touch(&self) {
        *self.inner.last_activity.write().unwrap() = Utc::now();
    }

    /// Whether nothing has touched the session for longer than `timeout`.
    #[must_use]
    pub fn idle_longer_than(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        // A negative span means clock skew; treat as fresh.
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }

    /// Time since the page was rendered.
    #[must_use]
    pub fn age(&self) -> Duration {
        (Utc::now() - self.inner.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

type SessionMap = RwLock<HashMap<String, Session>>;

/// Live page-view sessions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<SessionMap>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a freshly rendered page.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn create(&self) -> Session {
        let session = Session::new(Uuid::new_v4().to_string());
        self.sessions
            .write()
            .unwrap()
            .insert(session.id().to_string(), session.clone());
        session
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().unwrap().get(id).cloned()
    }

    /// Forget the session and cancel its deferred work.
    pub fn remove(&self, id: &str) -> Option<Session> {
        let removed = self.sessions.write().unwrap().remove(id);
        if let Some(session) = &removed {
            session.close();
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close and forget every session idle for longer than `timeout`.
    /// Returns how many were removed.
    pub fn sweep_idle(&self, timeout: Duration) -> usize {
        sweep(&self.sessions, timeout)
    }

    /// Sweep idle sessions every `every` until the store is dropped.
    pub fn spawn_sweeper(&self, idle_timeout: Duration, every: Duration) {
        let sessions = Arc::downgrade(&self.sessions);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(sessions) = sessions.upgrade() else {
                    break;
                };
                let removed = sweep(&sessions, idle_timeout);
                if removed > 0 {
                    tracing::info!(name: "session.swept", removed, "Removed idle sessions");
                }
            }
        });
    }
}

fn sweep(sessions: &SessionMap, timeout: Duration) -> usize {
    let mut map = sessions.write().unwrap();
    let before = map.len();
    map.retain(|_, session| {
        let idle = session.idle_longer_than(timeout);
        if idle {
            session.close();
        }
        !idle
    });
    before - map.len()
}
