//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw a flow problem: source and
//! sink are drawn as filled nodes and every edge is labelled with its capacity, or with
//! `flow/capacity` if a flow is provided. Edges carrying flow are colored.
//!
//! ```
//! use uflow::{prelude::*, io::*};
//!
//! let mut problem = NetworkBuilder::with_vertices(2).build::<FlowMatrix>().unwrap();
//! problem.network_mut().set_edge(0, 1, 5).unwrap();
//! let result = problem.solve().unwrap();
//!
//! let mut buffer = Vec::new();
//! DotWriter::new().try_write_flow(&problem, Some(&result), &mut buffer).unwrap();
//! assert_eq!(
//!     String::from_utf8(buffer).unwrap(),
//!     "digraph {\nu1[style=filled, color=red];u2[style=filled, color=red];\nu1->u2[label=\"5/5\", color=blue];\n}\n"
//! );
//! ```
use std::{fmt::Display, io::Write};

use itertools::Itertools;

use super::*;
use crate::algo::FlowResult;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
    /// Color of edges with positive flow
    flow_color: DotColor,
    /// Color of source and sink
    terminal_color: DotColor,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: true,
            prefix: "u".to_string(),
            flow_color: DotColor::Blue,
            terminal_color: DotColor::Red,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, nodes retain their interval value (-1 that of input)
    pub fn set_inc_nodes(&mut self, inc_nodes: bool) {
        self.inc_nodes = inc_nodes;
    }

    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.set_inc_nodes(inc_nodes);
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn set_node_prefix<S>(&mut self, prefix: S)
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
    }

    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.set_node_prefix(prefix);
        self
    }

    /// Set the color of edges carrying flow (`blue` by default)
    pub fn set_flow_color(&mut self, color: DotColor) {
        self.flow_color = color;
    }

    pub fn flow_color(mut self, color: DotColor) -> Self {
        self.set_flow_color(color);
        self
    }

    /// Set the color of source and sink (`red` by default)
    pub fn set_terminal_color(&mut self, color: DotColor) {
        self.terminal_color = color;
    }

    pub fn terminal_color(mut self, color: DotColor) -> Self {
        self.set_terminal_color(color);
        self
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes the problem and optionally a flow on it to `writer`.
    /// Without a flow, edges are labelled by their capacity only.
    pub fn try_write_flow<N, W>(
        &self,
        problem: &FlowProblem<N>,
        flow: Option<&FlowResult>,
        mut writer: W,
    ) -> Result<()>
    where
        N: ResidualNetwork,
        W: Write,
    {
        writeln!(writer, "digraph {{")?;

        for u in [problem.source(), problem.sink()] {
            write!(
                writer,
                "{}[style=filled, color={}];",
                self.format_node(u),
                self.terminal_color
            )?;
        }
        writeln!(writer)?;

        for CapacitatedEdge {
            edge: Edge(u, v),
            capacity,
        } in problem.network().edges().sorted_unstable()
        {
            let edge_flow = flow.and_then(|result| result.flow_of(u, v));
            let attributes = match edge_flow {
                None => format!("[label=\"{capacity}\"]"),
                Some(0) => format!("[label=\"0/{capacity}\"]"),
                Some(f) => format!("[label=\"{f}/{capacity}\", color={}]", self.flow_color),
            };

            write!(
                writer,
                "{}->{}{attributes};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "}}")
    }
}

impl<N> ProblemWriter<N> for DotWriter
where
    N: ResidualNetwork,
{
    fn try_write_problem<W>(&self, problem: &FlowProblem<N>, writer: W) -> Result<()>
    where
        W: Write,
    {
        self.try_write_flow(problem, None, writer)
    }
}

/// Trait for writing a problem to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the problem to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the problem to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<N> DotWrite for FlowProblem<N>
where
    N: ResidualNetwork,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_problem(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the colors permitted in Svg-Dot, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    DarkGreen,
    Gray,
    Green,
    Orange,
    Purple,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> FlowProblem<FlowArray> {
        FlowProblem::new(
            FlowArray::from_edges(3, [(1, 2, 2), (0, 1, 3), (0, 2, 1)]).unwrap(),
            Terminals::FirstAndLast,
        )
        .unwrap()
    }

    #[test]
    fn capacities_only() {
        let mut buffer = Vec::new();
        problem().try_write_dot(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "digraph {\n\
             u1[style=filled, color=red];u3[style=filled, color=red];\n\
             u1->u2[label=\"3\"];u1->u3[label=\"1\"];u2->u3[label=\"2\"];\n\
             }\n"
        );
    }

    #[test]
    fn flow_labels() {
        let mut problem = FlowProblem::new(
            FlowMatrix::from_edges(4, [(0, 1, 3), (1, 3, 2), (0, 2, 4), (2, 1, 1)]).unwrap(),
            Terminals::FirstAndLast,
        )
        .unwrap();
        let result = problem.solve().unwrap();
        assert_eq!(result.total_flow(), 2);

        let mut buffer = Vec::new();
        DotWriter::new()
            .inc_nodes(false)
            .node_prefix("v")
            .flow_color(DotColor::DarkGreen)
            .terminal_color(DotColor::Gray)
            .try_write_flow(&problem, Some(&result), &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "digraph {\n\
             v0[style=filled, color=gray];v3[style=filled, color=gray];\n\
             v0->v1[label=\"2/3\", color=darkgreen];v0->v2[label=\"0/4\"];\
             v1->v3[label=\"2/2\", color=darkgreen];v2->v1[label=\"0/1\"];\n\
             }\n"
        );
    }
}
