//! Command layer: a mesh store, the current selection and the settings
//! document, with undo/redo and repeat of the last command.

use crate::error::{OperationError, Result, UvError};
use crate::math::{Axis, Point2, Vector2};
use crate::operations::layout::{
    apply_layout, Align, AlignMode, Distribute, LayoutSolver, ScaleFit, ScaleFitMode, Space,
};
use crate::operations::query::GetShells;
use crate::operations::texel::{
    MeasureTexelDensity, SetTexelDensity, TexelDensity, TexelDensityParams,
};
use crate::operations::transform::{MirrorShells, OrientShells, RotateShells, TranslateShells};
use crate::settings::Settings;
use crate::topology::{MeshId, MeshStore, Selection};

/// A repeatable UV edit on the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Align(AlignMode),
    ScaleFit(ScaleFitMode),
    Distribute(Axis),
    Space { axis: Axis, gap: f64 },
    Mirror(Axis),
    Translate(Vector2),
    /// Counter-clockwise, in radians.
    Rotate(f64),
    Orient,
    SetDensity(TexelDensityParams),
}

/// Result of running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran; holds the number of shells or components edited.
    Applied(usize),
    /// Nothing to do: empty selection, too few shells or an unknown mode.
    Skipped,
}

/// UVs of a set of meshes, taken before a command edits them.
#[derive(Debug, Clone)]
struct Snapshot {
    meshes: Vec<(MeshId, Vec<Point2>)>,
}

impl Snapshot {
    fn capture(store: &MeshStore, meshes: &[MeshId]) -> Result<Self> {
        let meshes = meshes
            .iter()
            .map(|&id| Ok((id, store.mesh(id)?.uvs().to_vec())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { meshes })
    }

    fn mesh_ids(&self) -> Vec<MeshId> {
        self.meshes.iter().map(|(id, _)| *id).collect()
    }

    fn restore(&self, store: &mut MeshStore) -> Result<()> {
        for (id, uvs) in &self.meshes {
            store.mesh_mut(*id)?.set_uvs(uvs.clone())?;
        }
        Ok(())
    }
}

/// Runs commands against a mesh store.
///
/// Every applied command is one undo step and becomes the command
/// [`Session::repeat_last`] runs again.
#[derive(Debug)]
pub struct Session {
    store: MeshStore,
    settings: Settings,
    selection: Selection,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    last: Option<Command>,
}

impl Session {
    #[must_use]
    pub fn new(store: MeshStore, settings: Settings) -> Self {
        Self {
            store,
            settings,
            selection: Selection::default(),
            undo: Vec::new(),
            redo: Vec::new(),
            last: None,
        }
    }

    #[must_use]
    pub fn store(&self) -> &MeshStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MeshStore {
        &mut self.store
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replaces the current selection.
    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    #[must_use]
    pub fn last_command(&self) -> Option<Command> {
        self.last
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Runs `command` on the current selection.
    ///
    /// An empty selection or a group too small for the layout is logged and
    /// skipped. Any other failure restores the UVs the command touched.
    ///
    /// # Errors
    ///
    /// Returns degenerate geometry, invalid input and store errors.
    pub fn run(&mut self, command: Command) -> Result<Outcome> {
        if self.selection.is_empty() {
            tracing::warn!(?command, "nothing selected, skipping");
            return Ok(Outcome::Skipped);
        }
        let snapshot = Snapshot::capture(&self.store, &self.selection.meshes())?;

        match self.execute(command) {
            Ok(edited) => {
                tracing::debug!(?command, edited, "command applied");
                if edited > 0 {
                    self.undo.push(snapshot);
                    self.redo.clear();
                }
                self.last = Some(command);
                Ok(Outcome::Applied(edited))
            }
            Err(UvError::Operation(
                err @ (OperationError::EmptySelection | OperationError::InsufficientShells { .. }),
            )) => {
                tracing::warn!(?command, %err, "skipping");
                Ok(Outcome::Skipped)
            }
            Err(err) => {
                snapshot.restore(&mut self.store)?;
                Err(err)
            }
        }
    }

    /// Runs the last applied command again with the same arguments.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Session::run`].
    pub fn repeat_last(&mut self) -> Result<Outcome> {
        match self.last {
            Some(command) => self.run(command),
            None => {
                tracing::warn!("no command to repeat");
                Ok(Outcome::Skipped)
            }
        }
    }

    /// Reverts the most recent applied command. Returns `false` if there is
    /// nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns an error if a snapshotted mesh left the store.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(snapshot) = self.undo.pop() else {
            return Ok(false);
        };
        let current = Snapshot::capture(&self.store, &snapshot.mesh_ids())?;
        snapshot.restore(&mut self.store)?;
        self.redo.push(current);
        Ok(true)
    }

    /// Re-applies the most recently undone command. Returns `false` if there
    /// is nothing to redo.
    ///
    /// # Errors
    ///
    /// Returns an error if a snapshotted mesh left the store.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(snapshot) = self.redo.pop() else {
            return Ok(false);
        };
        let current = Snapshot::capture(&self.store, &snapshot.mesh_ids())?;
        snapshot.restore(&mut self.store)?;
        self.undo.push(current);
        Ok(true)
    }

    /// Aligns by mode name: `maxu`, `minu`, `maxv`, `minv`, `centeru` or
    /// `centerv`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Session::run`].
    pub fn align(&mut self, mode: &str) -> Result<Outcome> {
        self.run_parsed(mode.parse().map(Command::Align))
    }

    /// Scale-fits by mode name: `maxu`, `minu`, `maxv` or `minv`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Session::run`].
    pub fn scalefit(&mut self, mode: &str) -> Result<Outcome> {
        self.run_parsed(mode.parse().map(Command::ScaleFit))
    }

    /// Distributes along `u` or `v`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Session::run`].
    pub fn distribute(&mut self, mode: &str) -> Result<Outcome> {
        self.run_parsed(mode.parse().map(Command::Distribute))
    }

    /// Spaces evenly along `u` or `v`. Without a `gap` the stored
    /// `CURRENT_ALIGN_SPACE_VALUE` is used.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Session::run`], or a settings error if the
    /// stored gap is not a number.
    pub fn space(&mut self, mode: &str, gap: Option<f64>) -> Result<Outcome> {
        let gap = match gap {
            Some(gap) => gap,
            None => self.settings.align_space()?,
        };
        self.run_parsed(mode.parse().map(|axis| Command::Space { axis, gap }))
    }

    /// Mirrors along `u` or `v`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Session::run`].
    pub fn mirror(&mut self, mode: &str) -> Result<Outcome> {
        self.run_parsed(mode.parse().map(Command::Mirror))
    }

    /// Texel density of the current selection in the configured unit.
    /// Logs a warning and returns `None` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns an error for a component without UV area or an unknown unit
    /// in the settings.
    pub fn measure_density(&self, texture_size: u32) -> Result<Option<TexelDensity>> {
        if self.selection.is_empty() {
            tracing::warn!("nothing selected, skipping density measurement");
            return Ok(None);
        }
        let unit = self.settings.linear_unit()?;
        MeasureTexelDensity::new(&self.selection, texture_size)
            .with_unit(unit)
            .execute(&self.store)
            .map(Some)
    }

    fn run_parsed(
        &mut self,
        command: std::result::Result<Command, OperationError>,
    ) -> Result<Outcome> {
        match command {
            Ok(command) => self.run(command),
            Err(err) => {
                tracing::warn!(%err, "skipping");
                Ok(Outcome::Skipped)
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<usize> {
        match command {
            Command::Align(mode) => self.layout(&Align::new(mode)),
            Command::ScaleFit(mode) => self.layout(&ScaleFit::new(mode)),
            Command::Distribute(axis) => self.layout(&Distribute::new(axis)),
            Command::Space { axis, gap } => self.layout(&Space::new(axis, gap)),
            Command::Mirror(axis) => self.layout(&MirrorShells::new(axis)),
            Command::Translate(offset) => self.layout(&TranslateShells::new(offset)),
            Command::Rotate(angle) => self.layout(&RotateShells::new(angle)),
            Command::Orient => OrientShells::new(&self.selection).execute(&mut self.store),
            Command::SetDensity(params) => {
                let unit = self.settings.linear_unit()?;
                SetTexelDensity::new(&self.selection, params)
                    .with_unit(unit)
                    .execute(&mut self.store)
            }
        }
    }

    fn layout(&mut self, solver: &dyn LayoutSolver) -> Result<usize> {
        let shells = GetShells::new(&self.selection).execute(&self.store)?;
        if shells.is_empty() {
            return Err(OperationError::EmptySelection.into());
        }
        apply_layout(&mut self.store, &shells, solver)
    }
}
