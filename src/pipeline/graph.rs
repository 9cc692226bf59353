//! Task graph definitions.
//!
//! Tasks are named steps composed into an explicit graph with series
//! (sequential, fail-fast) and parallel (concurrent, join-on-all) nodes.

use crate::paths::AssetKind;

/// The named tasks the runner knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Remove the output directory
    Clean,
    /// Copy page files, excluding partials
    Pages,
    /// Compile the entry stylesheet
    Styles,
    /// Copy script files
    Scripts,
    /// Copy image files
    Images,
    /// Copy converted font files
    Fonts,
    /// Generate the font-face stylesheet fragment
    FontsStyle,
    /// Copy icon sources
    Icons,
    /// Copy media files
    Media,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKind::Clean => write!(f, "clean"),
            TaskKind::Pages => write!(f, "pages"),
            TaskKind::Styles => write!(f, "styles"),
            TaskKind::Scripts => write!(f, "scripts"),
            TaskKind::Images => write!(f, "images"),
            TaskKind::Fonts => write!(f, "fonts"),
            TaskKind::FontsStyle => write!(f, "fonts-style"),
            TaskKind::Icons => write!(f, "icons"),
            TaskKind::Media => write!(f, "media"),
        }
    }
}

impl TaskKind {
    /// The copy/compile task for an asset kind.
    pub fn for_asset(kind: AssetKind) -> Self {
        match kind {
            AssetKind::Pages => TaskKind::Pages,
            AssetKind::Styles => TaskKind::Styles,
            AssetKind::Scripts => TaskKind::Scripts,
            AssetKind::Images => TaskKind::Images,
            AssetKind::Fonts => TaskKind::Fonts,
            AssetKind::Icons => TaskKind::Icons,
            AssetKind::Media => TaskKind::Media,
        }
    }
}

/// A composable task graph node.
#[derive(Debug, Clone)]
pub enum TaskGraph {
    /// A single task
    Step(TaskKind),
    /// Children run one after another; a failure stops the sequence
    Series(Vec<TaskGraph>),
    /// Children run concurrently; all of them run to completion
    Parallel(Vec<TaskGraph>),
}

impl TaskGraph {
    /// Create a single-step node.
    pub fn step(kind: TaskKind) -> Self {
        TaskGraph::Step(kind)
    }

    /// Create a series node.
    pub fn series(children: Vec<TaskGraph>) -> Self {
        TaskGraph::Series(children)
    }

    /// Create a parallel node.
    pub fn parallel(children: Vec<TaskGraph>) -> Self {
        TaskGraph::Parallel(children)
    }

    /// Flatten the graph into its steps in definition order.
    pub fn steps(&self) -> Vec<TaskKind> {
        let mut out = Vec::new();
        self.collect_steps(&mut out);
        out
    }

    fn collect_steps(&self, out: &mut Vec<TaskKind>) {
        match self {
            TaskGraph::Step(kind) => out.push(*kind),
            TaskGraph::Series(children) | TaskGraph::Parallel(children) => {
                for child in children {
                    child.collect_steps(out);
                }
            }
        }
    }

    /// Number of steps in the graph.
    pub fn len(&self) -> usize {
        self.steps().len()
    }

    /// Check if the graph contains no steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full build pipeline.
///
/// Clean first, then every copy task concurrently, then the font-face
/// fragment, then the stylesheet compile that consumes it.
pub fn build_graph() -> TaskGraph {
    TaskGraph::series(vec![
        TaskGraph::step(TaskKind::Clean),
        TaskGraph::parallel(vec![
            TaskGraph::step(TaskKind::Pages),
            TaskGraph::step(TaskKind::Scripts),
            TaskGraph::step(TaskKind::Fonts),
            TaskGraph::step(TaskKind::Images),
            TaskGraph::step(TaskKind::Icons),
            TaskGraph::step(TaskKind::Media),
        ]),
        TaskGraph::step(TaskKind::FontsStyle),
        TaskGraph::step(TaskKind::Styles),
    ])
}

/// The graph re-run when a source file of the given kind changes.
///
/// A fonts change re-copies the fonts and then regenerates the fragment;
/// every other kind maps to its single task.
pub fn change_graph(kind: AssetKind) -> TaskGraph {
    match kind {
        AssetKind::Fonts => TaskGraph::series(vec![
            TaskGraph::step(TaskKind::Fonts),
            TaskGraph::step(TaskKind::FontsStyle),
        ]),
        other => TaskGraph::step(TaskKind::for_asset(other)),
    }
}
