//! The desk scene
//!
//! A pencil cup with six pencils, a computer with keyboard and mouse, a coffee
//! cup and a stack of books on a wooden desk, inside a room with a window
//! looking out onto a brick wall and a hedge.
//!
//! Everything is drawn through one [`ObjectBuilder`], in order. Each object
//! only sets what differs from the object before it, so the order of the
//! sections below matters.

#![allow(clippy::approx_constant)]

use cgmath::{vec2, vec3, vec4};

use super::{meshes::MeshKind, object::ObjectBuilder, scene_manager::RenderBridge};

/// Number of draw calls one pass over the scene issues
pub const DESK_SCENE_DRAW_COUNT: usize = 63;

/// Draws the whole scene through `bridge`
pub fn render_desk_scene<B: RenderBridge + ?Sized>(bridge: &mut B) {
    let mut object = ObjectBuilder::new(bridge);

    pencil_cup(&mut object);
    pencils(&mut object);
    computer(&mut object);
    keyboard_and_mouse(&mut object);
    coffee_cup(&mut object);
    books(&mut object);
    desk(&mut object);
    room(&mut object);
    outside(&mut object);
}

fn pencil_cup<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    // Outer cup
    object
        .set_rotation(vec3(3.0, 0.0, 0.0))
        .set_scale(vec3(2.0, 4.0, 2.0))
        .set_position(vec3(13.0, 1.0, -3.0))
        .set_mesh(MeshKind::Cylinder)
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("dark_ceramic")
        .set_uv_scale(vec2(1.0, 1.0))
        .set_material("glass")
        .render();

    // Inside, slightly taller so it caps the rim
    object
        .set_scale(vec3(1.7, 4.01, 1.7))
        .set_color(vec4(0.0, 0.0, 0.0, 1.0))
        .set_texture("")
        .render();
}

fn pencils<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    // Bodies
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(0.2, 8.0, 0.2))
        .set_position(vec3(13.6, 1.0, -3.0))
        .set_color(vec4(0.949, 0.839, 0.471, 1.0))
        .set_material("wood")
        .render();

    object
        .set_rotation(vec3(0.0, 0.0, 15.0))
        .set_scale(vec3(0.2, 7.0, 0.2))
        .set_position(vec3(12.7, 1.0, -2.8))
        .render();

    object
        .set_rotation(vec3(0.0, 0.0, 10.0))
        .set_position(vec3(12.9, 1.0, -3.4))
        .render();

    object
        .set_rotation(vec3(10.0, 0.0, 0.0))
        .set_scale(vec3(0.2, 6.4, 0.2))
        .set_position(vec3(13.3, 1.0, -2.6))
        .render();

    object.set_rotation(vec3(10.0, 0.0, 10.0)).render();
    object.set_rotation(vec3(10.0, 0.0, 5.0)).render();

    // Sharpened wood at the tips
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(0.2, 1.0, 0.2))
        .set_position(vec3(13.6, 9.0, -3.0))
        .set_mesh(MeshKind::Cone)
        .set_color(vec4(0.969, 0.949, 0.878, 1.0))
        .set_texture("wood")
        .set_uv_scale(vec2(0.5, 0.5))
        .render();
    pencil_tips(object);

    // Graphite points inside the tips
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(0.15, 1.1, 0.15))
        .set_position(vec3(13.6, 9.0, -3.0))
        .set_color(vec4(0.0, 0.0, 0.0, 1.0))
        .set_texture("")
        .set_material("glass")
        .render();
    pencil_tips(object);
}

/// Tips of pencils two to six, drawn with whatever else is current
fn pencil_tips<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    const TIPS: [([f32; 3], [f32; 3]); 5] = [
        ([0.0, 0.0, 10.0], [11.68, 7.9, -3.4]),
        ([0.0, 0.0, 14.0], [10.89, 7.76, -2.8]),
        ([10.0, 0.0, 0.0], [13.3, 7.32, -1.49]),
        ([10.0, 0.0, 5.0], [12.74, 7.28, -1.49]),
        ([10.0, 0.0, 8.0], [12.19, 7.2, -1.5]),
    ];

    for (rotation, position) in TIPS {
        object
            .set_rotation(rotation.into())
            .set_position(position.into())
            .render();
    }
}

fn computer<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    // Stand base
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(6.0, 0.5, 5.0))
        .set_position(vec3(-1.0, 1.0, -3.0))
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_uv_scale(vec2(1.0, 1.0))
        .set_mesh(MeshKind::Box)
        .set_material("soft")
        .render();

    // Stand upright
    object
        .set_position(vec3(-1.0, 3.5, -5.3))
        .set_color(vec4(0.97, 1.0, 1.0, 1.0))
        .set_rotation(vec3(100.0, 0.0, 0.0))
        .render();

    // Bracket holding the monitor
    object
        .set_scale(vec3(6.0, 0.5, 2.0))
        .set_position(vec3(-1.0, 5.7, -3.8))
        .set_color(vec4(0.97, 1.0, 1.0, 1.0))
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .render();

    // Monitor housing
    object
        .set_rotation(vec3(90.0, 0.0, 0.0))
        .set_scale(vec3(15.0, 0.5, 8.0))
        .set_position(vec3(-1.0, 7.0, -3.0))
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .render();

    // Bezel
    object
        .set_rotation(vec3(90.0, 0.0, 0.0))
        .set_scale(vec3(14.9, 0.49, 7.0))
        .set_position(vec3(-1.0, 7.4, -2.992))
        .set_color(vec4(0.0, 0.0, 0.0, 1.0))
        .set_material("glass")
        .render();

    // Screen
    object
        .set_rotation(vec3(90.0, 0.0, 0.0))
        .set_scale(vec3(14.2, 0.49, 6.4))
        .set_position(vec3(-1.0, 7.4, -2.991))
        .set_color(vec4(0.3, 0.5, 0.2, 1.0))
        .set_texture("homer")
        .set_material("glass")
        .render();
}

fn keyboard_and_mouse<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    object
        .set_rotation(vec3(7.0, 5.0, 0.0))
        .set_scale(vec3(10.0, 1.0, 3.0))
        .set_position(vec3(-2.0, 1.0, 3.0))
        .set_mesh(MeshKind::Box)
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("")
        .set_uv_scale(vec2(1.0, 1.0))
        .set_material("soft")
        .render();

    // Keys, a hair above the case
    object
        .set_rotation(vec3(7.0, 5.0, 0.0))
        .set_scale(vec3(9.9, 1.01, 2.9))
        .set_position(vec3(-2.0, 1.0, 3.0))
        .set_mesh(MeshKind::Box)
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("keys")
        .set_uv_scale(vec2(1.0, 1.0))
        .set_material("soft")
        .render();

    // Mouse body
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(1.5, 1.0, 2.0))
        .set_position(vec3(6.0, 1.0, 3.0))
        .set_mesh(MeshKind::HalfSphere)
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("")
        .set_uv_scale(vec2(1.0, 1.0))
        .set_material("soft")
        .render();

    // Button split
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(1.15, 0.805, 0.4))
        .set_position(vec3(6.0, 1.0, 2.25))
        .set_mesh(MeshKind::HalfTorus)
        .set_color(vec4(0.0, 0.0, 0.0, 1.0))
        .set_texture("")
        .set_uv_scale(vec2(1.0, 1.0))
        .set_material("matte")
        .render();
}

fn coffee_cup<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(1.2, 2.5, 1.2))
        .set_position(vec3(-10.0, 1.0, 0.0))
        .set_mesh(MeshKind::Cylinder)
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("")
        .set_material("soft")
        .render();

    // Handle
    object
        .set_rotation(vec3(90.0, 90.0, 0.0))
        .set_scale(vec3(0.7, 0.9, 0.7))
        .set_position(vec3(-10.0, 2.3, 1.0))
        .set_mesh(MeshKind::HalfTorus)
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("")
        .set_material("soft")
        .render();

    // Coffee surface
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(1.0, 2.51, 1.0))
        .set_position(vec3(-10.0, 1.0, 0.0))
        .set_mesh(MeshKind::Cylinder)
        .set_color(vec4(0.0, 0.0, 0.0, 1.0))
        .set_texture("water")
        .set_uv_scale(vec2(1.0, 1.0))
        .set_material("glass")
        .render();
}

fn books<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    // Bottom book
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(5.0, 1.0, 6.0))
        .set_position(vec3(-16.0, 1.0, -4.0))
        .set_mesh(MeshKind::Box)
        .set_color(vec4(0.44, 0.23, 1.0, 1.0))
        .set_texture("")
        .set_material("soft")
        .render();
    book_pages(object, 0.0, vec3(-15.9, 1.27, -4.0));

    // Middle book, turned a little
    object
        .set_rotation(vec3(0.0, 15.0, 0.0))
        .set_scale(vec3(5.0, 0.45, 6.0))
        .set_position(vec3(-16.0, 1.75, -4.0))
        .set_mesh(MeshKind::Box)
        .set_color(vec4(1.0, 0.7, 0.22, 1.0))
        .set_texture("")
        .set_material("wood")
        .render();
    book_pages(object, 15.0, vec3(-15.9, 1.75, -4.0));

    // Top book
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(5.0, 0.45, 6.0))
        .set_position(vec3(-16.0, 2.2, -4.0))
        .set_mesh(MeshKind::Box)
        .set_color(vec4(0.44, 0.23, 1.0, 1.0))
        .set_texture("drywall")
        .set_material("soft")
        .render();
    book_pages(object, 0.0, vec3(-15.9, 2.2, -4.0));
}

/// White page block poking out of a book cover
fn book_pages<B: RenderBridge + ?Sized>(
    object: &mut ObjectBuilder<B>,
    turn: f32,
    position: cgmath::Vector3<f32>,
) {
    object
        .set_rotation(vec3(0.0, turn, 0.0))
        .set_scale(vec3(4.81, 0.4, 6.1))
        .set_position(position)
        .set_mesh(MeshKind::Box)
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("")
        .set_material("glass")
        .render();
}

fn desk<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(40.0, 2.0, 20.0))
        .set_position(vec3(0.0, 0.0, 0.0))
        .set_color(vec4(0.773, 0.78, 0.702, 1.0))
        .set_mesh(MeshKind::Box)
        .set_texture("wood")
        .set_uv_scale(vec2(3.0, 3.0))
        .set_material("wood")
        .render();

    // Legs hang down from the top
    object
        .set_rotation(vec3(180.0, 0.0, 0.0))
        .set_scale(vec3(1.0, 18.0, 1.0))
        .set_position(vec3(18.0, 0.0, 8.0))
        .set_mesh(MeshKind::Cylinder)
        .set_color(vec4(0.369, 0.369, 0.369, 1.0))
        .set_texture("")
        .set_material("metal")
        .render();

    for position in [
        vec3(-18.0, 0.0, 8.0),
        vec3(-18.0, 0.0, -8.0),
        vec3(18.0, 0.0, -8.0),
    ] {
        object.set_position(position).render();
    }
}

fn room<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    // North wall, right of the window
    object
        .set_rotation(vec3(90.0, 0.0, 0.0))
        .set_scale(vec3(20.0, 1.0, 25.0))
        .set_position(vec3(60.0, 26.0, -50.0))
        .set_color(vec4(0.612, 0.612, 0.612, 1.0))
        .set_mesh(MeshKind::Plane)
        .set_texture("drywall")
        .set_uv_scale(vec2(3.0, 3.0))
        .set_material("wall")
        .render();

    // South wall
    object
        .set_scale(vec3(80.0, 1.0, 44.0))
        .set_position(vec3(0.0, 26.0, 80.0))
        .render();

    // North wall, left of the window
    object
        .set_scale(vec3(20.0, 1.0, 25.0))
        .set_position(vec3(-60.0, 26.0, -50.0))
        .render();

    // North wall, below the window
    object
        .set_scale(vec3(80.0, 1.0, 10.0))
        .set_position(vec3(0.0, -8.0, -50.0))
        .render();

    // North wall, above the window
    object
        .set_position(vec3(0.0, 60.0, -50.0))
        .set_uv_scale(vec2(5.0, 1.3))
        .render();

    // East and west walls
    object
        .set_rotation(vec3(0.0, 0.0, 90.0))
        .set_scale(vec3(44.0, 1.0, 65.0))
        .set_uv_scale(vec2(3.0, 3.0))
        .set_position(vec3(80.0, 26.0, 15.0))
        .render();
    object.set_position(vec3(-80.0, 26.0, 15.0)).render();

    // Ceiling
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(80.0, 1.0, 65.0))
        .set_position(vec3(0.0, 70.0, 15.0))
        .set_color(vec4(0.467, 0.467, 0.58, 1.0))
        .set_texture("")
        .render();

    // Ceiling light globe and its fitting
    object
        .set_mesh(MeshKind::Sphere)
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(5.0, 5.0, 5.0))
        .set_position(vec3(0.0, 71.0, 0.0))
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("")
        .set_material("glass")
        .render();

    object
        .set_mesh(MeshKind::Torus)
        .set_rotation(vec3(90.0, 0.0, 0.0))
        .set_position(vec3(0.0, 70.0, 0.0))
        .set_color(vec4(0.0, 0.0, 0.0, 1.0))
        .set_material("matte")
        .render();

    // Floor
    object
        .set_mesh(MeshKind::Plane)
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(80.0, 1.0, 65.0))
        .set_position(vec3(0.0, -18.0, 15.0))
        .set_color(vec4(0.467, 0.467, 0.58, 1.0))
        .set_texture("dark_carpet")
        .set_uv_scale(vec2(7.0, 7.0))
        .set_material("matte")
        .render();
}

fn outside<B: RenderBridge + ?Sized>(object: &mut ObjectBuilder<B>) {
    // Sky box: back, top and both sides
    object
        .set_rotation(vec3(90.0, 0.0, 0.0))
        .set_scale(vec3(100.0, 1.0, 100.0))
        .set_position(vec3(0.0, 0.0, -80.0))
        .set_color(vec4(0.725, 0.859, 0.988, 1.0))
        .set_texture("clouds")
        .set_uv_scale(vec2(3.0, 3.0))
        .set_material("glass")
        .render();

    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_position(vec3(0.0, 71.0, -80.0))
        .render();

    object
        .set_rotation(vec3(0.0, 0.0, 90.0))
        .set_position(vec3(-81.0, 0.0, -80.0))
        .render();
    object.set_position(vec3(81.0, 0.0, -80.0)).render();

    // Brick wall
    object
        .set_rotation(vec3(90.0, 0.0, 0.0))
        .set_scale(vec3(100.0, 1.0, 18.0))
        .set_position(vec3(0.0, 0.0, -79.0))
        .set_color(vec4(0.961, 0.329, 0.329, 1.0))
        .set_texture("orange_brick")
        .set_material("wall")
        .render();

    // Hedge along the wall
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(200.0, 15.0, 5.0))
        .set_position(vec3(0.0, -10.0, -79.0))
        .set_color(vec4(0.318, 0.961, 0.094, 0.5))
        .set_texture("green_vegetation")
        .set_uv_scale(vec2(5.0, 1.0))
        .set_mesh(MeshKind::Box)
        .set_material("hedge")
        .render();

    // Coping on top of the wall
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(200.0, 5.0, 5.0))
        .set_position(vec3(0.0, 19.0, -79.0))
        .set_color(vec4(1.0, 1.0, 1.0, 1.0))
        .set_texture("cement")
        .set_uv_scale(vec2(3.0, 3.0))
        .set_material("soft")
        .render();

    // Ground
    object
        .set_rotation(vec3(0.0, 0.0, 0.0))
        .set_scale(vec3(100.0, 1.0, 100.0))
        .set_position(vec3(0.0, -19.0, -80.0))
        .set_color(vec4(0.318, 0.961, 0.094, 1.0))
        .set_texture("green_vegetation")
        .set_mesh(MeshKind::Plane)
        .set_uv_scale(vec2(30.0, 30.0))
        .set_material("matte")
        .render();
}
