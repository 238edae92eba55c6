use std::path::PathBuf;

use evomap_engine::{Arrangement, ItemId, Scenario};
use evomap_router::{CanvasTransform, EdgeRouter};

use super::route::RouterArg;
use crate::{
    schema::{
        arrangement::ArrangementState,
        report::{EdgeLayout, LaidOutEdge},
    },
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EdgesArg {
    /// Arrangement JSON file to lay out
    #[arg(long)]
    arrangement: PathBuf,
    /// Scenario JSON file (defaults to the built-in tea shop)
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Canvas width in pixels
    #[arg(long, default_value_t = CanvasTransform::DEFAULT.width)]
    canvas_width: f64,
    /// Canvas height in pixels
    #[arg(long, default_value_t = CanvasTransform::DEFAULT.height)]
    canvas_height: f64,
    /// Margin kept free on every side of the canvas
    #[arg(long, default_value_t = CanvasTransform::DEFAULT.padding)]
    padding: f64,
    #[clap(flatten)]
    router: RouterArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EdgesArg) -> anyhow::Result<()> {
    let scenario = util::load_scenario(arg.scenario.as_deref())?;
    let state: ArrangementState = util::read_json_file("arrangement", &arg.arrangement)?;
    let arrangement = state.to_arrangement(&scenario);

    let canvas = CanvasTransform::new(arg.canvas_width, arg.canvas_height, arg.padding);
    let layout = lay_out(&scenario, &arrangement, canvas, arg.router.router());
    tracing::info!(
        edges = layout.edges.len(),
        skipped = layout.skipped,
        "relationships routed"
    );
    Output::save_json(&layout, arg.output.clone())
}

/// Routes every relationship whose endpoints are both placed.
///
/// Connectors run from the first to the second id of each relationship.
fn lay_out(
    scenario: &Scenario,
    arrangement: &Arrangement,
    canvas: CanvasTransform,
    router: EdgeRouter,
) -> EdgeLayout {
    let center = |id: &ItemId| {
        arrangement
            .item(id)
            .and_then(|item| item.actual_position())
            .map(|position| canvas.to_pixel(position))
    };

    let mut edges = vec![];
    let mut skipped = 0;
    for rel in arrangement.relationships() {
        let (source, target) = rel.endpoints();
        let (Some(from), Some(to)) = (center(source), center(target)) else {
            tracing::debug!(relationship = %rel, "endpoint not placed");
            skipped += 1;
            continue;
        };
        edges.push(LaidOutEdge {
            source: source.clone(),
            target: target.clone(),
            route: router.route(from, to),
        });
    }

    EdgeLayout {
        scenario: scenario.name.clone(),
        canvas,
        router,
        edges,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use evomap_engine::MapPoint;
    use evomap_router::PixelPoint;

    use super::*;

    #[test]
    fn test_lay_out_routes_placed_pairs_only() {
        let scenario = Scenario::tea_shop();
        let mut arrangement = Arrangement::new(&scenario);
        arrangement
            .place(&"kettle".into(), MapPoint::new(0.0, 50.0))
            .unwrap();
        arrangement
            .place(&"power".into(), MapPoint::new(100.0, 50.0))
            .unwrap();
        arrangement.connect(&"kettle".into(), &"power".into()).unwrap();
        arrangement.connect(&"kettle".into(), &"hot_water".into()).unwrap();

        let layout = lay_out(
            &scenario,
            &arrangement,
            CanvasTransform::default(),
            EdgeRouter::default(),
        );
        assert_eq!(layout.skipped, 1);
        assert_eq!(layout.edges.len(), 1);

        let edge = &layout.edges[0];
        assert_eq!(edge.source, ItemId::new("kettle"));
        assert_eq!(edge.target, ItemId::new("power"));
        assert_eq!(edge.route.from, PixelPoint::new(40.0, 350.0));
        // source lies left of the target, so the connector stops short of its left edge
        assert_eq!(edge.route.to, PixelPoint::new(855.0, 350.0));
    }

    #[test]
    fn test_layout_serializes_flat_edges() {
        let scenario = Scenario::tea_shop();
        let layout = lay_out(
            &scenario,
            &Arrangement::new(&scenario),
            CanvasTransform::default(),
            EdgeRouter::default(),
        );
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["edges"], serde_json::json!([]));
        assert_eq!(json["canvas"]["width"], 1000.0);
        assert_eq!(json["router"]["clearance"], 10.0);
    }
}
