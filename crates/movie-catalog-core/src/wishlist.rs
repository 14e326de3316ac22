use anyhow::Result;
use movie_catalog_models::MovieId;
use tokio::sync::watch;
use tracing::debug;

use crate::storage::WishlistStorage;

/// The session's authoritative set of favorited movie IDs.
///
/// Insertion order is preserved and duplicates are rejected. Every mutation
/// writes through to storage before it returns, so the durable encoding and
/// the in-memory sequence never diverge across an await point. Consumers
/// that need to observe changes subscribe to the watch channel; the owner
/// injects the container where it is needed, there is no global instance.
pub struct Wishlist {
    ids: Vec<MovieId>,
    storage: WishlistStorage,
    changes: watch::Sender<Vec<MovieId>>,
}

impl Wishlist {
    /// Build the session wishlist from the durable copy. Missing or
    /// undecodable storage yields an empty wishlist, never an error.
    pub fn load(storage: WishlistStorage) -> Self {
        let ids = storage.load();
        let (changes, _) = watch::channel(ids.clone());
        Self { ids, storage, changes }
    }

    pub fn ids(&self) -> &[MovieId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id)
    }

    /// Append `id`. Adding an ID that is already present is a no-op; the
    /// sequence stays duplicate-free.
    pub fn add(&mut self, id: MovieId) -> Result<()> {
        if self.ids.contains(&id) {
            debug!(%id, "already on wishlist");
            return Ok(());
        }
        self.ids.push(id);
        self.persist()
    }

    /// Remove every occurrence of `id`. Filter semantics, so duplicates in a
    /// durable file written before uniqueness was enforced are scrubbed too.
    pub fn remove(&mut self, id: MovieId) -> Result<()> {
        let before = self.ids.len();
        self.ids.retain(|other| *other != id);
        if self.ids.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Flip membership; returns whether `id` is on the wishlist afterwards.
    pub fn toggle(&mut self, id: MovieId) -> Result<bool> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Observe the sequence after every completed mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<MovieId>> {
        self.changes.subscribe()
    }

    // Write-through happens before subscribers are notified: a consumer that
    // re-reads storage on a change event must see the sequence it was told
    // about.
    fn persist(&mut self) -> Result<()> {
        self.storage.save(&self.ids)?;
        self.changes.send_replace(self.ids.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::WishlistStorage;

    fn wishlist_in(dir: &tempfile::TempDir) -> Wishlist {
        Wishlist::load(WishlistStorage::new(dir.path().join("wishlist.json")))
    }

    fn read_back(dir: &tempfile::TempDir) -> Vec<MovieId> {
        WishlistStorage::new(dir.path().join("wishlist.json")).load()
    }

    #[test]
    fn empty_store_initializes_empty() {
        let dir = tempfile::tempdir().unwrap();
        let wishlist = wishlist_in(&dir);
        assert!(wishlist.is_empty());
        assert_eq!(wishlist.len(), 0);
    }

    #[test]
    fn add_then_contains() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        wishlist.add(MovieId(550)).unwrap();
        assert!(wishlist.contains(MovieId(550)));
        assert!(!wishlist.contains(MovieId(551)));
    }

    #[test]
    fn add_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        wishlist.add(MovieId(550)).unwrap();
        drop(wishlist);

        let reloaded = wishlist_in(&dir);
        assert_eq!(reloaded.ids(), &[MovieId(550)]);
    }

    #[test]
    fn add_add_remove_leaves_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        wishlist.add(MovieId(550)).unwrap();
        wishlist.add(MovieId(551)).unwrap();
        wishlist.remove(MovieId(550)).unwrap();
        assert_eq!(wishlist.ids(), &[MovieId(551)]);
        assert_eq!(read_back(&dir), vec![MovieId(551)]);
    }

    #[test]
    fn add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        wishlist.add(MovieId(550)).unwrap();
        wishlist.add(MovieId(550)).unwrap();
        assert_eq!(wishlist.ids(), &[MovieId(550)]);
        assert_eq!(read_back(&dir), vec![MovieId(550)]);
    }

    #[test]
    fn remove_then_contains_is_false_regardless_of_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        for _ in 0..3 {
            wishlist.add(MovieId(550)).unwrap();
        }
        wishlist.remove(MovieId(550)).unwrap();
        assert!(!wishlist.contains(MovieId(550)));
    }

    #[test]
    fn remove_scrubs_duplicates_from_legacy_storage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wishlist.json"), "[550,551,550]").unwrap();

        let mut wishlist = wishlist_in(&dir);
        assert_eq!(wishlist.len(), 3);
        assert!(wishlist.contains(MovieId(550)));

        wishlist.remove(MovieId(550)).unwrap();
        assert_eq!(wishlist.ids(), &[MovieId(551)]);
        assert_eq!(read_back(&dir), vec![MovieId(551)]);
    }

    #[test]
    fn every_mutation_matches_the_durable_copy() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        let ops: [(bool, u64); 7] = [
            (true, 550),
            (true, 551),
            (true, 603),
            (false, 551),
            (true, 551),
            (false, 550),
            (false, 999),
        ];
        for (is_add, id) in ops {
            if is_add {
                wishlist.add(MovieId(id)).unwrap();
            } else {
                wishlist.remove(MovieId(id)).unwrap();
            }
            assert_eq!(read_back(&dir), wishlist.ids().to_vec());
        }
        assert_eq!(wishlist.ids(), &[MovieId(603), MovieId(551)]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        wishlist.add(MovieId(603)).unwrap();
        wishlist.add(MovieId(550)).unwrap();
        wishlist.add(MovieId(11)).unwrap();
        assert_eq!(wishlist.ids(), &[MovieId(603), MovieId(550), MovieId(11)]);
    }

    #[test]
    fn corrupt_store_initializes_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wishlist.json"), "definitely not json").unwrap();
        let wishlist = wishlist_in(&dir);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn subscribers_observe_each_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        let mut first = wishlist.subscribe();
        let mut second = wishlist.subscribe();

        wishlist.add(MovieId(550)).unwrap();
        assert!(first.has_changed().unwrap());
        assert_eq!(*first.borrow_and_update(), vec![MovieId(550)]);
        assert_eq!(*second.borrow_and_update(), vec![MovieId(550)]);

        wishlist.remove(MovieId(550)).unwrap();
        assert!(first.has_changed().unwrap());
        assert!(first.borrow_and_update().is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let dir = tempfile::tempdir().unwrap();
        let mut wishlist = wishlist_in(&dir);
        assert!(wishlist.toggle(MovieId(550)).unwrap());
        assert!(wishlist.contains(MovieId(550)));
        assert!(!wishlist.toggle(MovieId(550)).unwrap());
        assert!(!wishlist.contains(MovieId(550)));
    }
}
