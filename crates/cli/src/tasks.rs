//! JSON job descriptions and their evaluation.
//!
//! A job is one routine plus its arguments, tagged by `"task"`. Evaluation
//! produces an [`Outcome`] whose failure convention is picked by [`Lowering`].

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use matgeo::geom2::{
    collinearity, conic_line_intersection, hyperbola_normals_intersection, intersect_lines,
    mat2_from_row_major, mat2_to_row_major, mul_transpose, reflect_line, rotate_deg,
    sample_segment, tangent_points, triangle_area, Conic2, Line2, ParamLine2,
};
use matgeo::geom3::{combine4, direction_angle_deg, work_done};
use matgeo::integrate::area_under_root_curve;
use matgeo::linalg::{
    char_roots, det_from_traces, eigenvalues2, line_normals_at_distance, solve_cramer,
    solve_gauss, solve_quadratic, square_from_row_major, sym_eigen2, verify_eigen_relation,
    LinearSystem2, QuadRoots, Sym2,
};
use matgeo::sentinel::{status_code, NanSentinel};
use matgeo::{GeomError, GeomResult};
use nalgebra::{DVector, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How a failed computation is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Lowering {
    /// Value filled with NaN (serialized as `null`), `code = -1`.
    #[default]
    Nan,
    /// `value = null`, `code = -1`.
    Code,
    /// Abort with an error.
    Error,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[default]
    Gauss,
    Cramer,
}

/// One routine invocation.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum Task {
    SolveLinear {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
        #[serde(default)]
        method: Method,
    },
    Quadratic {
        a: f64,
        b: f64,
        c: f64,
    },
    CharRoots {
        trace: f64,
        det: f64,
    },
    Eigenvalues {
        m: [f64; 4],
    },
    SymEigen {
        m11: f64,
        m12: f64,
        m22: f64,
    },
    LineNormals {
        p: [f64; 2],
        d: f64,
    },
    Tangents {
        r: f64,
        px: f64,
    },
    HyperbolaNormals {
        a: f64,
        b: f64,
        theta: f64,
    },
    MulTranspose {
        a: [f64; 4],
        b: [f64; 4],
    },
    Work {
        force: [f64; 3],
        from: [f64; 3],
        to: [f64; 3],
    },
    Rotate {
        p: [f64; 2],
        degrees: f64,
    },
    Collinearity {
        p1: [f64; 2],
        p2: [f64; 2],
        p3: [f64; 2],
    },
    TriangleArea {
        p1: [f64; 2],
        p2: [f64; 2],
        p3: [f64; 2],
    },
    Reflect {
        src: [f64; 3],
        mirror: [f64; 3],
    },
    IntersectLines {
        l1: [f64; 3],
        l2: [f64; 3],
    },
    Sample {
        a: [f64; 2],
        b: [f64; 2],
        n: usize,
    },
    Trapezoid {
        a: f64,
        b: f64,
        n: usize,
    },
    ConicLine {
        v: [f64; 4],
        u: [f64; 2],
        f: f64,
        h: [f64; 2],
        m: [f64; 2],
    },
    EigenCheck {
        n: usize,
        q: Vec<f64>,
        r: Vec<f64>,
        r_inv: Vec<f64>,
        x: Vec<f64>,
        lambda: f64,
    },
    DirectionAngle {
        d1: [f64; 3],
        d2: [f64; 3],
    },
    Combine {
        a: [i64; 4],
        b: [i64; 4],
        c: [i64; 4],
    },
    DetFromTraces {
        trace: f64,
        trace_cubed: f64,
    },
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::SolveLinear { .. } => "solve_linear",
            Task::Quadratic { .. } => "quadratic",
            Task::CharRoots { .. } => "char_roots",
            Task::Eigenvalues { .. } => "eigenvalues",
            Task::SymEigen { .. } => "sym_eigen",
            Task::LineNormals { .. } => "line_normals",
            Task::Tangents { .. } => "tangents",
            Task::HyperbolaNormals { .. } => "hyperbola_normals",
            Task::MulTranspose { .. } => "mul_transpose",
            Task::Work { .. } => "work",
            Task::Rotate { .. } => "rotate",
            Task::Collinearity { .. } => "collinearity",
            Task::TriangleArea { .. } => "triangle_area",
            Task::Reflect { .. } => "reflect",
            Task::IntersectLines { .. } => "intersect_lines",
            Task::Sample { .. } => "sample",
            Task::Trapezoid { .. } => "trapezoid",
            Task::ConicLine { .. } => "conic_line",
            Task::EigenCheck { .. } => "eigen_check",
            Task::DirectionAngle { .. } => "direction_angle",
            Task::Combine { .. } => "combine",
            Task::DetFromTraces { .. } => "det_from_traces",
        }
    }
}

/// Result of one job after lowering.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Outcome {
    pub task: &'static str,
    /// `"ok"` or `"failed"`.
    pub status: &'static str,
    pub code: i32,
    pub error: Option<String>,
    pub value: Value,
}

fn v2(p: [f64; 2]) -> Vector2<f64> {
    Vector2::new(p[0], p[1])
}

fn v3(p: [f64; 3]) -> Vector3<f64> {
    Vector3::new(p[0], p[1], p[2])
}

fn line(l: [f64; 3]) -> Line2 {
    Line2::new(l[0], l[1], l[2])
}

fn point_json(p: &Vector2<f64>) -> Value {
    json!([p.x, p.y])
}

fn pair_json(pq: &(Vector2<f64>, Vector2<f64>)) -> Value {
    json!([point_json(&pq.0), point_json(&pq.1)])
}

fn line_json(l: &Line2) -> Value {
    json!([l.a, l.b, l.c])
}

fn roots_json(r: &QuadRoots) -> Value {
    match *r {
        QuadRoots::Real { hi, lo } => json!({ "kind": "real", "roots": [[hi, 0.0], [lo, 0.0]] }),
        QuadRoots::Complex { re, im } => {
            json!({ "kind": "complex", "roots": [[re, im], [re, -im]] })
        }
    }
}

fn dvec_json(v: &DVector<f64>) -> Value {
    json!(v.iter().copied().collect::<Vec<f64>>())
}

/// Lower a result whose value type has a NaN representative.
fn lower_nan<T, F>(task: &'static str, res: GeomResult<T>, how: Lowering, render: F) -> Result<Outcome>
where
    T: NanSentinel,
    F: Fn(&T) -> Value,
{
    let nan = render(&T::nan());
    lower(task, res.map(|v| render(&v)), how, nan)
}

/// Lower a result whose value has no NaN shape; the sentinel is `null`.
fn lower_plain<T, F>(task: &'static str, res: GeomResult<T>, how: Lowering, render: F) -> Result<Outcome>
where
    F: Fn(&T) -> Value,
{
    lower(task, res.map(|v| render(&v)), how, Value::Null)
}

fn lower(task: &'static str, res: GeomResult<Value>, how: Lowering, nan: Value) -> Result<Outcome> {
    let code = status_code(&res);
    match res {
        Ok(value) => Ok(Outcome {
            task,
            status: "ok",
            code,
            error: None,
            value,
        }),
        Err(err) => {
            tracing::info!(task, %err, ?how, "computation failed");
            let value = match how {
                Lowering::Nan => nan,
                Lowering::Code => Value::Null,
                Lowering::Error => return Err(anyhow!(err).context(format!("task {task}"))),
            };
            Ok(Outcome {
                task,
                status: "failed",
                code,
                error: Some(err.to_string()),
                value,
            })
        }
    }
}

/// Evaluate `task`, lowering failures per `how`.
pub fn evaluate(task: &Task, how: Lowering) -> Result<Outcome> {
    let name = task.name();
    match task {
        Task::SolveLinear {
            a,
            b,
            c,
            d,
            e,
            f,
            method,
        } => {
            let sys = LinearSystem2::new(*a, *b, *c, *d, *e, *f);
            let res = match method {
                Method::Gauss => solve_gauss(&sys),
                Method::Cramer => solve_cramer(&sys),
            };
            lower_nan(name, res, how, point_json)
        }
        Task::Quadratic { a, b, c } => lower_plain(name, solve_quadratic(*a, *b, *c), how, roots_json),
        Task::CharRoots { trace, det } => Ok(ok(name, roots_json(&char_roots(*trace, *det)))),
        Task::Eigenvalues { m } => {
            Ok(ok(name, roots_json(&eigenvalues2(&mat2_from_row_major(*m)))))
        }
        Task::SymEigen { m11, m12, m22 } => {
            let pairs = sym_eigen2(&Sym2::new(*m11, *m12, *m22));
            let value = json!(pairs
                .iter()
                .map(|e| json!({ "value": e.value, "vector": point_json(&e.vector) }))
                .collect::<Vec<_>>());
            Ok(ok(name, value))
        }
        Task::LineNormals { p, d } => {
            lower_nan(name, line_normals_at_distance(v2(*p), *d), how, pair_json)
        }
        Task::Tangents { r, px } => lower_nan(name, tangent_points(*r, *px), how, pair_json),
        Task::HyperbolaNormals { a, b, theta } => lower_nan(
            name,
            hyperbola_normals_intersection(*a, *b, *theta),
            how,
            point_json,
        ),
        Task::MulTranspose { a, b } => {
            let m = mul_transpose(&mat2_from_row_major(*a), &mat2_from_row_major(*b));
            Ok(ok(name, json!(mat2_to_row_major(&m))))
        }
        Task::Work { force, from, to } => Ok(ok(name, json!(work_done(v3(*force), v3(*from), v3(*to))))),
        Task::Rotate { p, degrees } => Ok(ok(name, point_json(&rotate_deg(v2(*p), *degrees)))),
        Task::Collinearity { p1, p2, p3 } => {
            Ok(ok(name, json!(collinearity(v2(*p1), v2(*p2), v2(*p3)))))
        }
        Task::TriangleArea { p1, p2, p3 } => {
            Ok(ok(name, json!(triangle_area(v2(*p1), v2(*p2), v2(*p3)))))
        }
        Task::Reflect { src, mirror } => {
            Ok(ok(name, line_json(&reflect_line(&line(*src), &line(*mirror)))))
        }
        Task::IntersectLines { l1, l2 } => {
            lower_nan(name, intersect_lines(&line(*l1), &line(*l2)), how, point_json)
        }
        Task::Sample { a, b, n } => lower_plain(name, sample_segment(v2(*a), v2(*b), *n), how, |pts| {
            json!(pts.iter().map(point_json).collect::<Vec<_>>())
        }),
        Task::Trapezoid { a, b, n } => {
            lower_nan(name, area_under_root_curve(*a, *b, *n), how, |v| json!(v))
        }
        Task::ConicLine { v, u, f, h, m } => {
            let conic = Conic2::new(mat2_from_row_major(*v), v2(*u), *f);
            let line = ParamLine2::new(v2(*h), v2(*m));
            lower_nan(name, conic_line_intersection(&conic, &line), how, |k| {
                json!([k.0, k.1])
            })
        }
        Task::EigenCheck {
            n,
            q,
            r,
            r_inv,
            x,
            lambda,
        } => {
            let res = eigen_check(*n, q, r, r_inv, x, *lambda);
            lower_plain(name, res, how, |c| {
                json!({
                    "q_rx": dvec_json(&c.q_rx),
                    "lambda_rx": dvec_json(&c.lambda_rx),
                    "q_rinv_x": dvec_json(&c.q_rinv_x),
                    "lambda_rinv_x": dvec_json(&c.lambda_rinv_x),
                })
            })
        }
        Task::DirectionAngle { d1, d2 } => {
            lower_nan(name, direction_angle_deg(v3(*d1), v3(*d2)), how, |v| json!(v))
        }
        Task::Combine { a, b, c } => {
            lower_plain(name, combine4(*a, *b, *c), how, |d| json!(d))
        }
        Task::DetFromTraces { trace, trace_cubed } => {
            lower_nan(name, det_from_traces(*trace, *trace_cubed), how, |v| json!(v))
        }
    }
}

fn ok(task: &'static str, value: Value) -> Outcome {
    Outcome {
        task,
        status: "ok",
        code: 0,
        error: None,
        value,
    }
}

fn eigen_check(
    n: usize,
    q: &[f64],
    r: &[f64],
    r_inv: &[f64],
    x: &[f64],
    lambda: f64,
) -> GeomResult<matgeo::linalg::EigenCheck> {
    if x.len() != n {
        return Err(GeomError::dims(n, x.len()));
    }
    let q = square_from_row_major(n, q)?;
    let r = square_from_row_major(n, r)?;
    let r_inv = square_from_row_major(n, r_inv)?;
    let x = DVector::from_column_slice(x);
    verify_eigen_relation(&q, &r, &r_inv, &x, lambda)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Task {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn solve_linear_defaults_to_gauss() {
        let t = parse(r#"{"task":"solve_linear","a":5,"b":4,"c":4,"d":3,"e":9500,"f":7370}"#);
        assert!(matches!(
            t,
            Task::SolveLinear {
                method: Method::Gauss,
                ..
            }
        ));
        let out = evaluate(&t, Lowering::Nan).unwrap();
        assert_eq!(out.code, 0);
        let x = out.value[0].as_f64().unwrap();
        assert!((x - 980.0).abs() < 1e-9);
    }

    #[test]
    fn singular_system_in_each_lowering() {
        let t = parse(
            r#"{"task":"solve_linear","a":1,"b":2,"c":2,"d":4,"e":3,"f":6,"method":"cramer"}"#,
        );
        let nan = evaluate(&t, Lowering::Nan).unwrap();
        assert_eq!(nan.code, -1);
        assert_eq!(nan.status, "failed");
        // NaN serializes as null, but the shape is kept
        assert_eq!(nan.value, json!([null, null]));
        assert!(nan.error.unwrap().contains("singular"));

        let code = evaluate(&t, Lowering::Code).unwrap();
        assert_eq!(code.code, -1);
        assert_eq!(code.value, Value::Null);

        let err = evaluate(&t, Lowering::Error).unwrap_err();
        assert!(format!("{err:#}").contains("solve_linear"));
    }

    #[test]
    fn tangents_and_line_normals() {
        let out = evaluate(&parse(r#"{"task":"tangents","r":5,"px":8}"#), Lowering::Nan).unwrap();
        assert_eq!(out.value[0][0], json!(3.125));
        let inside = evaluate(&parse(r#"{"task":"tangents","r":5,"px":2}"#), Lowering::Nan).unwrap();
        assert_eq!(inside.value, json!([[null, null], [null, null]]));

        let none = evaluate(
            &parse(r#"{"task":"line_normals","p":[1,1],"d":5}"#),
            Lowering::Code,
        )
        .unwrap();
        assert_eq!(none.code, -1);
    }

    #[test]
    fn quadratic_roots_as_pairs() {
        let out = evaluate(&parse(r#"{"task":"quadratic","a":1,"b":-5,"c":6}"#), Lowering::Nan).unwrap();
        assert_eq!(out.value["kind"], "real");
        assert_eq!(out.value["roots"][0], json!([3.0, 0.0]));
        let cx = evaluate(&parse(r#"{"task":"quadratic","a":1,"b":0,"c":1}"#), Lowering::Nan).unwrap();
        assert_eq!(cx.value["kind"], "complex");
        assert_eq!(cx.value["roots"][0][1], json!(1.0));
        let bad = evaluate(&parse(r#"{"task":"quadratic","a":0,"b":1,"c":1}"#), Lowering::Nan).unwrap();
        assert_eq!(bad.code, -1);
        assert_eq!(bad.value, Value::Null);
    }

    #[test]
    fn reflect_keeps_fallback() {
        let out = evaluate(
            &parse(r#"{"task":"reflect","src":[3,-2,7],"mirror":[0,0,4]}"#),
            Lowering::Error,
        )
        .unwrap();
        assert_eq!(out.code, 0);
        assert_eq!(out.value, json!([3.0, -2.0, 7.0]));
    }

    #[test]
    fn eigen_check_shapes() {
        let t = parse(
            r#"{"task":"eigen_check","n":2,"q":[2,0,0,5],"r":[1,0,0,1],"r_inv":[1,0,0,1],"x":[1,0],"lambda":2}"#,
        );
        let out = evaluate(&t, Lowering::Nan).unwrap();
        assert_eq!(out.value["q_rx"], json!([2.0, 0.0]));
        assert_eq!(out.value["lambda_rx"], json!([2.0, 0.0]));
        let short = parse(
            r#"{"task":"eigen_check","n":2,"q":[2,0,0],"r":[1,0,0,1],"r_inv":[1,0,0,1],"x":[1,0],"lambda":2}"#,
        );
        let out = evaluate(&short, Lowering::Code).unwrap();
        assert!(out.error.unwrap().contains("expected 4, got 3"));
    }

    #[test]
    fn fixed_size_tasks() {
        let w = evaluate(
            &parse(r#"{"task":"work","force":[2,-5,6],"from":[6,1,-3],"to":[4,-3,-2]}"#),
            Lowering::Nan,
        )
        .unwrap();
        assert_eq!(w.value, json!(22.0));
        let m = evaluate(
            &parse(r#"{"task":"mul_transpose","a":[1,2,3,4],"b":[5,6,7,8]}"#),
            Lowering::Nan,
        )
        .unwrap();
        assert_eq!(m.value, json!([19.0, 43.0, 22.0, 50.0]));
        let c = evaluate(
            &parse(r#"{"task":"combine","a":[1,2,3,4],"b":[0,-1,5,2],"c":[7,7,-20,0]}"#),
            Lowering::Nan,
        )
        .unwrap();
        assert_eq!(c.value, json!([10, 11, -1, 16]));
    }

    #[test]
    fn combine_overflow_is_lowered() {
        let job = format!(
            r#"{{"task":"combine","a":[{},0,0,0],"b":[0,0,0,0],"c":[0,0,0,0]}}"#,
            i64::MAX / 2
        );
        let t = parse(&job);
        let out = evaluate(&t, Lowering::Nan).unwrap();
        assert_eq!(out.code, -1);
        assert_eq!(out.value, Value::Null);
        assert!(out.error.unwrap().contains("overflows"));
        assert!(evaluate(&t, Lowering::Error).is_err());
    }

    #[test]
    fn unknown_task_is_rejected() {
        assert!(serde_json::from_str::<Task>(r#"{"task":"plot","w":3}"#).is_err());
    }
}
