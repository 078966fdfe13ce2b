use fixpix_history::HistoryStack;

/// Deterministischer Pseudozufall, damit Fehlschläge reproduzierbar bleiben.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn assert_invariants(history: &HistoryStack<u32>) {
    assert!(history.len() <= history.max_depth());
    if let Some(index) = history.index() {
        assert!(index < history.len());
        assert_eq!(history.can_undo(), index > 0);
        assert_eq!(history.can_redo(), index < history.len() - 1);
    } else {
        assert!(history.is_empty());
    }
    for pair in history.entries().windows(2) {
        assert_ne!(pair[0], pair[1], "keine direkt aufeinanderfolgenden Duplikate");
    }
}

#[test]
fn length_never_exceeds_depth_and_current_tracks_last_push() {
    let mut history = HistoryStack::new(20);
    let mut last_recorded = None;

    for value in 0..200u32 {
        let snapshot = value / 3;
        history.push(snapshot);
        if last_recorded != Some(snapshot) {
            last_recorded = Some(snapshot);
        }
        assert_eq!(history.current().copied(), last_recorded);
        assert_invariants(&history);
    }
    assert_eq!(history.len(), 20);
}

#[test]
fn duplicate_push_never_moves_cursor() {
    let mut rng = Lcg(7);
    let mut history = HistoryStack::new(8);
    for _ in 0..500 {
        match rng.next() % 4 {
            0 => {
                history.undo();
            }
            1 => {
                history.redo();
            }
            _ => {
                history.push((rng.next() % 5) as u32);
            }
        }
        if let Some(current) = history.current().copied() {
            let before = (history.index(), history.len());
            assert!(!history.push(current));
            assert_eq!((history.index(), history.len()), before);
        }
        assert_invariants(&history);
    }
}

#[test]
fn undo_then_redo_restores_state() {
    let mut rng = Lcg(42);
    let mut history = HistoryStack::new(20);
    for _ in 0..300 {
        history.push((rng.next() % 1000) as u32);
        let steps = (rng.next() % 4) as usize;
        for _ in 0..steps {
            history.undo();
        }

        let before = history.current().copied();
        if history.undo().is_some() {
            let redone = history.redo().copied();
            assert_eq!(redone, before);
        }
        assert_eq!(history.current().copied(), before);
        assert_invariants(&history);
    }
}

#[test]
fn branch_truncation_after_double_undo() {
    let mut history = HistoryStack::new(20);
    history.push('A');
    history.push('B');
    history.push('C');
    history.undo();
    history.undo();
    history.push('D');
    assert_eq!(history.entries(), &['A', 'D']);
    assert!(!history.can_redo());
}
