//! Output rendering: JSON and polymake scripts.
//!
//! The polymake script builds a `SubdivisionOfPoints` from the point list
//! (homogenized with a leading ones column) and the maximal cells, then
//! appends the optional analysis blocks requested by `ScriptFlags`.

use anyhow::Result;
use newton_subdiv::planar::Subdivision;
use serde::Serialize;

/// Optional analysis blocks appended after the subdivision definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptFlags {
    pub check_regular: bool,
    pub check_unimodular: bool,
    pub visualize: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubdivisionJson<'a> {
    points: Vec<[i64; 2]>,
    maximal_cells: &'a [Vec<usize>],
    boundary: &'a [usize],
}

fn point_rows(sub: &Subdivision) -> Vec<[i64; 2]> {
    sub.points.iter().map(|p| [p.x, p.y]).collect()
}

/// Pretty JSON with `points`, `maximalCells` and `boundary`.
pub fn render_json(sub: &Subdivision) -> Result<String> {
    let doc = SubdivisionJson {
        points: point_rows(sub),
        maximal_cells: &sub.maximal_cells,
        boundary: &sub.boundary,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

const REGULAR_BLOCK: &str = r#"# Check for regularity and print weights if regular
if($sigma->REGULAR){
    print "The subdivision is regular.\n";
    print "The following weights allow the subdivision to be regular:\n";
    $weights = $sigma->WEIGHTS;
    $mat = vector2row($weights);
    $len = $weights->dim();
    for my $i (0 .. $len-1) {
        print ${${points}[$i]}[0], ",", ${${points}[$i]}[1], ": ", $mat->elem(0,$i), "\n";
    }
} else {
    print "The subdivision is not regular.\n";
}

"#;

const UNIMODULAR_BLOCK: &str = r#"# Check for unimodularity
if($sigma->UNIMODULAR){
    print "The subdivision is unimodular.\n";
} else {
    print "The subdivision is not unimodular.\n";
}

"#;

const VISUAL_BLOCK: &str = "# Visualize\n$sigma->VISUAL;\n\n";

/// polymake script defining `$sigma` plus the requested analysis blocks.
pub fn render_polymake(sub: &Subdivision, flags: ScriptFlags) -> Result<String> {
    let points = serde_json::to_string(&point_rows(sub))?;
    let cells = serde_json::to_string(&sub.maximal_cells)?;
    let mut s = String::new();
    s.push_str("application \"tropical\";\n");
    s.push_str("application \"fan\";\n\n");
    s.push_str("# Set up Newton polygon with subdivision\n");
    s.push_str(&format!("$points = {points};\n"));
    s.push_str(&format!("$maximalCells = {cells};\n"));
    s.push_str(&format!(
        "$pointMatrix = (ones_vector<Rational>({})) | (new Matrix<Rational>($points));\n",
        sub.points.len()
    ));
    s.push_str(
        "$sigma = new SubdivisionOfPoints(POINTS=>$pointMatrix, MAXIMAL_CELLS=>$maximalCells);\n\n",
    );
    if flags.check_regular {
        s.push_str(REGULAR_BLOCK);
    }
    if flags.check_unimodular {
        s.push_str(UNIMODULAR_BLOCK);
    }
    if flags.visualize {
        s.push_str(VISUAL_BLOCK);
    }
    Ok(s)
}
