//! A relation between a binary tree and the in-order list of its node
//! names, in the spirit of the teacher's `examples/tree-nodes.rs` — but
//! without the `#[compound]` struct-derive machinery that program relies
//! on (compound-term derivation is out of scope here). A tree is just a
//! `Term::Seq`: `[]` for a leaf, `[name, left, right]` otherwise.
use kanren_core::prelude::*;
use kanren_core::relation::appendo;

fn leaf() -> Term {
    Term::seq(vec![])
}

fn node(name: &str, left: Term, right: Term) -> Term {
    Term::seq(vec![Term::sym(name), left, right])
}

/// `tree_nodes(tree, names)`: `names` is the in-order flattening of `tree`.
fn tree_nodes(tree: Term, names: Term) -> Goal {
    goal_fn(move |s| {
        let tree_w = s.walk(&tree);
        match tree_w {
            Term::Seq(items) if items.is_empty() => eq(names.clone(), leaf())(s),
            Term::Seq(items) if items.len() == 3 => {
                call_with_fresh(Some("left_names"), {
                    let items = items.clone();
                    let names = names.clone();
                    move |left_names| {
                        let items = items.clone();
                        let names = names.clone();
                        call_with_fresh(Some("right_names"), move |right_names| {
                            let name_only = Term::seq(vec![items[0].clone()]);
                            let left = items[1].clone();
                            let right = items[2].clone();
                            let left_names_rec = left_names.clone();
                            let right_names_rec = right_names.clone();
                            conj(
                                closure(move || tree_nodes(left.clone(), left_names_rec.clone())),
                                conj(
                                    closure(move || tree_nodes(right.clone(), right_names_rec.clone())),
                                    call_with_fresh(Some("mid"), move |mid| {
                                        conj(
                                            appendo(name_only.clone(), right_names.clone(), mid.clone()),
                                            appendo(left_names.clone(), mid, names.clone()),
                                        )
                                    }),
                                ),
                            )
                        })
                    }
                })(s)
            }
            _ => fail()(s),
        }
    })
}

fn goal_fn(f: impl Fn(Substitution) -> kanren_core::stream::Stream + 'static) -> Goal {
    std::rc::Rc::new(f)
}

fn main() {
    let tree = node(
        "a",
        node("b", leaf(), node("c", leaf(), leaf())),
        node("d", leaf(), leaf()),
    );
    let q = var(Some("q"));
    let query = tree_nodes(tree, q.clone());
    let answers = run_all(&query);
    println!("in-order node names: {}", reify(&q, &answers[0]));
}
