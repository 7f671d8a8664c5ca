//! Example: two arms from one fragment
//!
//! Builds a two-link arm fragment once and instantiates it under `left_` and
//! `right_` prefixes. Both copies attach to a shared `/world` link. Prints
//! the URDF and SRDF documents to stdout.
//!
//! Usage: cargo run --example two_arms [output_dir]

use std::env;
use std::path::Path;

use robot_description::urdf::{box_geometry, cylinder, inertial, limit, origin, Inertia};
use robot_description::xml::{print_to_string_pretty, write_file};
use robot_description::{Element, SrdfBuilder, UrdfBuilder};
use tracing_subscriber::EnvFilter;

const LINK_LENGTH: f64 = 0.4;

fn arm_links(urdf: &UrdfBuilder, mount_y: f64) -> Vec<Element> {
    let link_inertial = || {
        inertial(
            1.0,
            [0.0, 0.0, LINK_LENGTH / 2.0],
            [0.0, 0.0, 0.0],
            Inertia::solid_cylinder(1.0, 0.04, LINK_LENGTH),
        )
    };
    let link_visual = || {
        [
            origin([0.0, 0.0, LINK_LENGTH / 2.0], [0.0, 0.0, 0.0]),
            cylinder(0.04, LINK_LENGTH),
        ]
    };

    vec![
        urdf.material("blue", [0.1, 0.2, 0.8, 1.0]),
        urdf.link(
            "base",
            inertial(2.0, [0, 0, 0], [0, 0, 0], Inertia::solid_box(2.0, [0.2, 0.2, 0.1])),
            [box_geometry([0.2, 0.2, 0.1])],
            [box_geometry([0.2, 0.2, 0.1])],
            "/black",
        ),
        urdf.link("upper_arm", link_inertial(), link_visual(), link_visual(), "blue"),
        urdf.link("forearm", link_inertial(), link_visual(), link_visual(), "blue"),
        urdf.virtual_link("tool0"),
        urdf.fixed_joint("mount", "/world", "base", [0.0, mount_y, 0.0], [0, 0, 0]),
        urdf.revolute_joint(
            "shoulder",
            "base",
            "upper_arm",
            [0.0, 0.0, 0.05],
            [0, 0, 0],
            [0, 1, 0],
            limit(-1.57, 1.57, 40.0, 2.0),
        ),
        urdf.revolute_joint(
            "elbow",
            "upper_arm",
            "forearm",
            [0.0, 0.0, LINK_LENGTH],
            [0, 0, 0],
            [0, 1, 0],
            limit(-2.5, 2.5, 20.0, 2.0),
        ),
        urdf.fixed_joint("flange", "forearm", "tool0", [0.0, 0.0, LINK_LENGTH], [0, 0, 0]),
        urdf.simple_transmission("shoulder"),
        urdf.simple_transmission("elbow"),
    ]
}

fn arm_groups(srdf: &SrdfBuilder) -> Vec<Element> {
    vec![
        srdf.chain_group("arm", "base", "tool0"),
        srdf.group_state("home", "arm", [("shoulder", 0.0), ("elbow", 0.0)]),
        srdf.group_state("ready", "arm", [("shoulder", 0.5), ("elbow", 1.2)]),
        srdf.end_effector("tool", "arm", "tool0"),
        srdf.disable_collisions("base", "upper_arm", "Adjacent"),
        srdf.disable_collisions("upper_arm", "forearm", "Adjacent"),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let shared = UrdfBuilder::default();
    let mut urdf_items = vec![
        shared.material("black", [0.0, 0.0, 0.0, 1.0]),
        shared.virtual_link("world"),
    ];
    let mut srdf_items = Vec::new();

    for (prefix, mount_y) in [("left_", 0.5), ("right_", -0.5)] {
        urdf_items.extend(arm_links(&UrdfBuilder::new(prefix), mount_y));
        srdf_items.extend(arm_groups(&SrdfBuilder::new(prefix)));
    }
    srdf_items.push(
        SrdfBuilder::default().disable_collisions("left_base", "right_base", "Never"),
    );

    let urdf = shared.robot("two_arms", urdf_items);
    let srdf = SrdfBuilder::default().robot("two_arms", srdf_items);

    match env::args().nth(1) {
        Some(dir) => {
            let dir = Path::new(&dir);
            write_file(&urdf, dir.join("two_arms.urdf"))?;
            write_file(&srdf, dir.join("two_arms.srdf"))?;
            eprintln!("Wrote two_arms.urdf and two_arms.srdf to {}", dir.display());
        }
        None => {
            print!("{}", print_to_string_pretty(&urdf)?);
            print!("{}", print_to_string_pretty(&srdf)?);
        }
    }

    Ok(())
}
