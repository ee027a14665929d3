//! The game round controller
//!
//! `GameSession` is the WASM-owned source of truth: it glues pointer
//! gestures to the placement model, re-checks the win condition after
//! every mutation, and drives the tone scheduler. Everything happens
//! synchronously per input event; only the scheduled tones themselves
//! play out later on the audio clock.

pub mod win;

use serde::{Deserialize, Serialize};

use crate::audio::{ToneScheduler, ToneSink};
use crate::gesture::{DragResolver, DragUpdate, GestureOutcome, Point, SlotGeometry};
use crate::models::{Catalog, CatalogError, Placement};
use win::{WinSignal, WinTracker};

/// Speed multiplier for the celebratory full-theme playback
pub const WIN_THEME_SPEED: f32 = 1.33;

/// What a completed gesture did, for the renderer to react to
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TurnReport {
    /// Piece that was clicked (its phrase is already scheduled)
    pub clicked_piece: Option<String>,

    /// How long the clicked phrase plays, for the singing animation
    pub playback_secs: Option<f32>,

    /// Slot the dragged piece landed in
    pub placed_slot: Option<usize>,

    /// The dragged piece was removed from its slot (dropped outside)
    pub removed: bool,

    /// Win state after this gesture
    pub has_won: bool,

    /// The full theme was just cued (win edge; fires once per round)
    pub theme_cued: bool,
}

/// Serializable snapshot of everything the renderer paints
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameView {
    pub started: bool,
    pub has_won: bool,
    /// Slot contents in slot order
    pub slots: Vec<Option<String>>,
    /// Pieces still in the unplaced pool, in catalog order
    pub pool: Vec<String>,
    /// Piece currently held by a drag, if any
    pub dragging_piece: Option<String>,
}

/// One round of the puzzle: catalog, placement, gesture resolution,
/// win tracking, and audio scheduling.
pub struct GameSession<S: ToneSink> {
    catalog: Catalog,
    placement: Placement,
    resolver: DragResolver,
    tracker: WinTracker,
    scheduler: ToneScheduler<S>,
    started: bool,
}

impl<S: ToneSink> GameSession<S> {
    /// Build a session over `catalog`. Validation failures are fatal:
    /// the game must not reach a playable state with a bad catalog.
    pub fn new(catalog: Catalog, sink: S) -> Result<Self, CatalogError> {
        catalog.validate()?;
        log::info!(
            "session ready: {} pieces, {} theme notes",
            catalog.pieces().len(),
            catalog.full_theme().len()
        );
        Ok(Self {
            catalog,
            placement: Placement::new(),
            resolver: DragResolver::new(),
            tracker: WinTracker::new(),
            scheduler: ToneScheduler::new(sink),
            started: false,
        })
    }

    /// Convenience constructor over the standard catalog
    pub fn standard(sink: S) -> Result<Self, CatalogError> {
        Self::new(Catalog::standard(), sink)
    }

    /// Mark the round playable. Fullscreen/orientation negotiation is the
    /// host's business and must not gate this.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn has_won(&self) -> bool {
        self.tracker.has_won()
    }

    /// Begin a gesture on `piece_id`. Unknown ids (stale renderer state)
    /// are no-ops, not errors.
    pub fn pointer_down(&mut self, piece_id: &str, pointer_id: i32, point: Point) -> bool {
        if self.catalog.piece(piece_id).is_none() {
            log::debug!("pointer down on unknown piece `{}`", piece_id);
            return false;
        }
        self.resolver.on_pointer_down(piece_id, pointer_id, point)
    }

    /// Feed a pointer move; returns ghost/highlight info once dragging
    pub fn pointer_move(
        &mut self,
        pointer_id: i32,
        point: Point,
        slots: &dyn SlotGeometry,
    ) -> Option<DragUpdate> {
        self.resolver.on_pointer_move(pointer_id, point, slots)
    }

    /// Complete a gesture and apply its outcome.
    ///
    /// A click plays the piece's phrase. A drop on a slot places the
    /// piece there (with the placement model's swap semantics). A drop
    /// outside every slot removes the piece only if the gesture began in
    /// a slot; a pool piece just returns to the pool. Any placement
    /// mutation re-checks the win condition, and the win edge cues the
    /// full theme.
    pub fn pointer_up(
        &mut self,
        pointer_id: i32,
        point: Point,
        slots: &dyn SlotGeometry,
    ) -> Option<TurnReport> {
        let outcome = self.resolver.on_pointer_up(pointer_id, point, slots)?;
        let mut report = TurnReport::default();
        match outcome {
            GestureOutcome::Click { piece_id } => {
                report.playback_secs = self.play_piece(&piece_id);
                report.clicked_piece = Some(piece_id);
            }
            GestureOutcome::Drop {
                piece_id,
                target: Some(slot),
            } => {
                self.placement.place(&piece_id, slot);
                report.placed_slot = Some(slot);
                self.check_win(&mut report);
            }
            GestureOutcome::Drop {
                piece_id,
                target: None,
            } => {
                if self.placement.is_piece_in_play(&piece_id) {
                    self.placement.remove(&piece_id);
                    report.removed = true;
                    self.check_win(&mut report);
                }
            }
        }
        report.has_won = self.tracker.has_won();
        Some(report)
    }

    /// Abandon the live gesture with no outcome (pointer cancel)
    pub fn pointer_cancel(&mut self) {
        self.resolver.cancel();
    }

    /// Piece currently held by a drag, if any
    pub fn dragging_piece(&self) -> Option<&str> {
        self.resolver.active_piece()
    }

    /// Schedule a piece's phrase; returns its playback length, or `None`
    /// for an unknown id
    pub fn play_piece(&self, piece_id: &str) -> Option<f32> {
        let piece = self.catalog.piece(piece_id)?;
        self.scheduler.play_piece(piece);
        Some(piece.playback_secs())
    }

    /// Schedule the full theme at the given speed multiplier
    pub fn play_theme(&self, speed_multiplier: f32) {
        self.scheduler
            .play_sequence(self.catalog.full_theme(), speed_multiplier);
    }

    /// Clear the board and win state for a fresh round
    pub fn replay(&mut self) {
        self.placement.clear_all();
        self.tracker.reset();
        self.resolver.cancel();
        log::info!("round reset");
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> GameView {
        let pool = self
            .catalog
            .pieces()
            .iter()
            .filter(|piece| !self.placement.is_piece_in_play(&piece.id))
            .map(|piece| piece.id.clone())
            .collect();
        GameView {
            started: self.started,
            has_won: self.tracker.has_won(),
            slots: self.placement.current_order().to_vec(),
            pool,
            dragging_piece: self.dragging_piece().map(str::to_string),
        }
    }

    fn check_win(&mut self, report: &mut TurnReport) {
        let signal = self
            .tracker
            .check(self.placement.current_order(), &self.catalog);
        if signal == WinSignal::ThemeCued {
            self.play_theme(WIN_THEME_SPEED);
            report.theme_cued = true;
        }
    }
}
