//! End-to-end tests: compose prefixed fragments into URDF and SRDF
//! documents, print them, and read them back.

use pretty_assertions::assert_eq;

use robot_description::urdf::{cylinder, inertial, limit, origin, Inertia};
use robot_description::xml::{parse_str, print_to_string, print_to_string_pretty, XmlParser};
use robot_description::{Element, NameContext, SrdfBuilder, UrdfBuilder};

fn arm(urdf: &UrdfBuilder) -> Vec<Element> {
    vec![
        urdf.material("arm", [1, 0, 0, 1]),
        urdf.virtual_link("base"),
        urdf.link(
            "forearm",
            inertial(0.5, [0, 0, 0], [0, 0, 0], Inertia::diagonal(0.01, 0.01, 0.001)),
            [origin([0, 0, 0], [0, 0, 0]), cylinder(0.03, 0.3)],
            [cylinder(0.03, 0.3)],
            "arm",
        ),
        urdf.fixed_joint("mount", "/world", "base", [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        urdf.revolute_joint(
            "elbow",
            "base",
            "forearm",
            [0.0, 0.0, 0.1],
            [0.0, 0.0, 0.0],
            [0, 0, 1],
            limit(-1.0, 1.0, 5.0, 1.0),
        ),
        urdf.simple_transmission("elbow"),
    ]
}

fn names(root: &Element, tag: &str) -> Vec<String> {
    root.find_all(tag)
        .filter_map(|e| e.attribute("name").map(str::to_string))
        .collect()
}

#[test]
fn test_two_prefixed_arms_share_absolute_world() {
    let shared = UrdfBuilder::default();
    let mut items = vec![shared.virtual_link("world")];
    items.extend(arm(&UrdfBuilder::new("left_")));
    items.extend(arm(&UrdfBuilder::new("right_")));
    let robot = shared.robot("cell", items);

    assert_eq!(
        names(&robot, "link"),
        vec![
            "world",
            "left_base",
            "left_forearm",
            "right_base",
            "right_forearm"
        ]
    );
    assert_eq!(
        names(&robot, "joint"),
        vec!["left_mount", "left_elbow", "right_mount", "right_elbow"]
    );
    assert_eq!(
        names(&robot, "transmission"),
        vec!["left_elbow_transmission", "right_elbow_transmission"]
    );

    // Both mounts hang off the single unprefixed world link.
    let parents: Vec<_> = robot
        .find_all("joint")
        .filter(|j| j.attribute("type") == Some("fixed"))
        .filter_map(|j| j.find("parent").and_then(|p| p.attribute("link")))
        .collect();
    assert_eq!(parents, vec!["world", "world"]);
}

#[test]
fn test_urdf_round_trip_through_xml() {
    let urdf = UrdfBuilder::new("robot_");
    let robot = urdf.robot("r", arm(&urdf));

    let compact = print_to_string(&robot).unwrap();
    let pretty = print_to_string_pretty(&robot).unwrap();

    assert_eq!(parse_str(&compact).unwrap(), robot);
    assert_eq!(parse_str(&pretty).unwrap(), robot);
}

#[test]
fn test_transmission_document_text() {
    let urdf = UrdfBuilder::new("robot_");
    let xml = print_to_string_pretty(&urdf.simple_transmission("elbow")).unwrap();

    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<transmission name="robot_elbow_transmission">
  <type>transmission_interface/SimpleTransmission</type>
  <joint name="robot_elbow">
    <hardwareInterface>EffortJointInterface</hardwareInterface>
  </joint>
  <actuator name="robot_elbow_actuator">
    <mechanicalReduction>1</mechanicalReduction>
  </actuator>
</transmission>
"#;
    assert_eq!(xml, expected);
}

#[test]
fn test_srdf_document() {
    let srdf = SrdfBuilder::new("left_");
    let doc = SrdfBuilder::default().robot(
        "cell",
        [
            srdf.chain_group("arm", "base", "forearm"),
            srdf.group_state("ready", "arm", [("j1", 0.0), ("j2", 1.57)]),
            srdf.end_effector("hand", "gripper", "forearm"),
            srdf.disable_collisions("linkA", "linkB", "never"),
        ],
    );

    let xml = print_to_string_pretty(&doc).unwrap();
    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<robot name="cell">
  <group name="left_arm">
    <chain base_link="left_base" tip_link="left_forearm" />
  </group>
  <group_state name="left_ready" group="left_arm">
    <joint name="left_j1" value="0.0" />
    <joint name="left_j2" value="1.57" />
  </group_state>
  <end_effector name="left_hand" group="left_gripper" parent_link="left_forearm" />
  <disable_collisions link1="left_linkA" link2="left_linkB" reason="never" />
</robot>
"#;
    assert_eq!(xml, expected);
    assert_eq!(parse_str(&xml).unwrap(), doc);
}

#[test]
fn test_hand_written_fragment_is_composable() {
    let gazebo = XmlParser::new()
        .parse_str(
            r#"
            <gazebo reference="left_forearm">
              <!-- simulator tuning -->
              <mu1>0.8</mu1>
            </gazebo>"#,
        )
        .unwrap();

    let urdf = UrdfBuilder::new("left_");
    let mut robot = urdf.robot("cell", arm(&urdf));
    robot.append(gazebo);

    let reparsed = parse_str(&print_to_string(&robot).unwrap()).unwrap();
    let block = reparsed.find("gazebo").unwrap();
    assert_eq!(block.attribute("reference"), Some("left_forearm"));
    assert_eq!(block.find("mu1").and_then(Element::text).as_deref(), Some("0.8"));
}

#[test]
fn test_builders_share_one_context() {
    let ctx = NameContext::new("cell1_");
    let urdf = UrdfBuilder::with_context(ctx.clone());
    let srdf = SrdfBuilder::with_context(ctx);

    let link = urdf.virtual_link("tool0");
    let group = srdf.chain_group("arm", "base", "tool0");

    assert_eq!(
        link.attribute("name"),
        group.find("chain").and_then(|c| c.attribute("tip_link"))
    );
}
