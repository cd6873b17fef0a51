//! Built-in key tables for Lottie documents.
//!
//! Each table lists the minified key, the readable name it becomes, and how
//! its value is translated. Keys that only matter to players (SVG ids, render
//! flags, 3D switches) live in the `extra` tables and are kept only on request.
//!
//! CONTENTS and PROPERTY each serve several shape kinds, so a short key has one
//! readable name even where Lottie reuses it with another meaning:
//!
//! | key | readable name | also means |
//! |-----|---------------|------------|
//! | `r` (contents) | `roundness` | fill rule on `fl`/`gf`, rotation on `sr` |
//! | `d` (contents) | `direction` | dash list on `st`/`gs` |
//! | `x` (property) | `expression` | X component of a split position |
//! | `y` (property) | `splitY` | Y component of a split position |
//!
//! Values are carried unchanged either way, so a round trip is unaffected.

use crate::schema::{Blueprint, ExtraField as X, Field, FieldKind::*, SchemaId};

/// Raw key naming a group inside a content list.
pub const NAME_KEY: &str = "nm";
/// Raw key carrying a layer or shape type code.
pub const TYPE_KEY: &str = "ty";
/// Readable name of a property's value slot.
pub const VALUE: &str = "value";
/// Readable names of a keyframe's value slots.
pub const START_VALUE: &str = "startValue";
pub const END_VALUE: &str = "endValue";

const COMP_FIELDS: &[Field] = &[
    Field::plain("nm", "name"),
    Field::plain("v", "lottieVersion"),
    Field::plain("w", "width"),
    Field::plain("h", "height"),
    Field::plain("fr", "frameRate"),
    Field::plain("ip", "firstFrame"),
    Field::plain("op", "lastFrame"),
    Field::new("assets", "assets", Assets),
    Field::new("layers", "layers", Layers),
];

const COMP_EXTRA: &[X] = &[
    X::new("ddd", "3DLayer"),
    X::new("markers", "markers"),
    X::new("fonts", "fonts"),
    X::new("chars", "characters"),
    X::new("meta", "metadata"),
    X::new("slots", "slots"),
    X::new("bg", "background"),
];

const ASSET_FIELDS: &[Field] = &[
    Field::plain("id", "id"),
    Field::plain("nm", "name"),
    Field::plain("w", "width"),
    Field::plain("h", "height"),
    Field::plain("fr", "frameRate"),
    Field::new("layers", "layers", Layers),
    Field::plain("u", "directory"),
    Field::plain("p", "fileName"),
    Field::plain("e", "embedded"),
];

const ASSET_EXTRA: &[X] = &[
    X::new("mn", "matchName"),
    X::new("t", "assetType"),
    X::new("sid", "slotID"),
    X::new("xt", "extraComposition"),
];

const LAYER_FIELDS: &[Field] = &[
    Field::new("ty", "type", TypeCode),
    Field::plain("nm", "name"),
    Field::plain("ind", "index"),
    Field::plain("parent", "parent"),
    Field::plain("cl", "class"),
    Field::new("ks", "Transform", Group(SchemaId::Transform)),
    Field::new("shapes", "Contents", Group(SchemaId::Contents)),
    Field::new("ef", "effects", Group(SchemaId::Effect)),
    Field::plain("markers", "markers"),
];

const LAYER_EXTRA: &[X] = &[
    X::new("ddd", "3DLayer"),
    X::new("t", "textData"),
    X::new("ao", "autoOrient"),
    X::new("bm", "blendMode"),
    X::new("ln", "layerID"),
    X::new("ip", "inPoint"),
    X::new("op", "outPoint"),
    X::new("st", "startTime"),
    X::new("hasMask", "hasMask"),
    X::new("masksProperties", "maskProperties"),
    X::new("sr", "stretch"),
    X::new("refId", "referenceID"),
    X::new("tm", "timeRemapping"),
    X::new("w", "width"),
    X::new("h", "height"),
    X::new("sc", "solidColor"),
    X::new("sw", "solidWidth"),
    X::new("sh", "solidHeight"),
    X::new("tt", "matteMode"),
    X::new("tp", "matteParent"),
    X::new("td", "matteTarget"),
    X::new("tg", "xmlTag"),
    X::new("hd", "hidden"),
    X::new("mn", "matchName"),
    X::new("cp", "collapseTransformLegacy"),
    X::new("ct", "collapseTransform"),
    X::new("mb", "motionBlur"),
    X::new("sy", "layerStyles"),
    X::new("pe", "perspective"),
    X::new("au", "audioSettings"),
];

const CONTENTS_FIELDS: &[Field] = &[
    Field::new("ty", "type", TypeCode),
    Field::plain("nm", "name"),
    Field::new("it", "children", Children),
    Field::new("c", "color", Color),
    Field::new("o", "opacity", Nested(SchemaId::Property)),
    Field::new("ks", "path", Nested(SchemaId::Property)),
    Field::plain("np", "numProps"),
    Field::plain("cix", "propertyIndexAlt"),
    Field::plain("ix", "propertyIndex"),
    Field::plain("bm", "blendMode"),
    Field::plain("mn", "matchName"),
    Field::plain("hd", "hidden"),
];

const CONTENTS_EXTRA: &[X] = &[
    X::new("_render", "renderFlag"),
    X::new("d", "direction"),
    X::new("p", "position"),
    X::new("s", "size"),
    X::new("r", "roundness"),
    X::new("w", "strokeWidth"),
    X::new("lc", "lineCap"),
    X::new("lj", "lineJoin"),
    X::new("ml", "miterLimit"),
    X::new("ml2", "miterLimitAlt"),
    X::new("e", "endPoint"),
    X::new("g", "gradient"),
    X::new("t", "gradientType"),
    X::new("h", "highlightLength"),
    X::new("a", "highlightAngle"),
    X::new("sy", "starType"),
    X::new("pt", "points"),
    X::new("ir", "innerRadius"),
    X::new("is", "innerRoundness"),
    X::new("or", "outerRadius"),
    X::new("os", "outerRoundness"),
    X::new("m", "mode"),
    X::new("tr", "repeaterTransform"),
    X::new("mm", "mergeMode"),
    X::new("cl", "class"),
    X::new("ln", "layerID"),
    X::new("ind", "index"),
];

const TRANSFORM_FIELDS: &[Field] = &[
    Field::new("o", "opacity", Nested(SchemaId::Property)),
    Field::new("p", "position", Nested(SchemaId::Property)),
    Field::new("a", "anchorPoint", Nested(SchemaId::Property)),
    Field::new("s", "scale", Nested(SchemaId::Property)),
    Field::new("r", "rotation", Nested(SchemaId::Property)),
];

const TRANSFORM_EXTRA: &[X] = &[
    X::new("px", "positionX"),
    X::new("py", "positionY"),
    X::new("pz", "positionZ"),
    X::new("sk", "skew"),
    X::new("sa", "skewAxis"),
    X::new("rx", "rotationX"),
    X::new("ry", "rotationY"),
    X::new("rz", "rotationZ"),
    X::new("or", "orientation"),
    X::new("ty", "type"),
    X::new("nm", "name"),
];

const EFFECT_FIELDS: &[Field] = &[
    Field::plain("ty", "effectType"),
    Field::plain("nm", "name"),
    Field::plain("mn", "matchName"),
    Field::plain("ix", "propertyIndex"),
    Field::plain("en", "enabled"),
    Field::plain("np", "numProps"),
    Field::new("ef", "children", Children),
    Field::new("v", "value", Nested(SchemaId::Property)),
];

const EFFECT_EXTRA: &[X] = &[X::new("hd", "hidden")];

const PROPERTY_FIELDS: &[Field] = &[
    Field::new("k", VALUE, Keyframes(SchemaId::Keyframe)),
    Field::plain("x", "expression"),
];

const PROPERTY_EXTRA: &[X] = &[
    X::new("ix", "propertyIndex"),
    X::new("a", "animated"),
    X::new("l", "dimensions"),
    X::new("sid", "slotID"),
    X::new("s", "split"),
    X::new("y", "splitY"),
    X::new("z", "splitZ"),
];

const KEYFRAME_FIELDS: &[Field] = &[
    Field::plain("t", "startTime"),
    Field::plain("s", START_VALUE),
    Field::plain("e", END_VALUE),
    Field::plain("i", "bezierIn"),
    Field::plain("o", "bezierOut"),
    Field::plain("to", "outTangent"),
    Field::plain("ti", "inTangent"),
    Field::plain("h", "hold"),
];

const KEYFRAME_EXTRA: &[X] = &[X::new("n", "easingName")];

/// Every schema the default registry is built from.
pub const BLUEPRINTS: &[Blueprint] = &[
    Blueprint {
        id: SchemaId::Comp,
        child: None,
        fields: COMP_FIELDS,
        extra: COMP_EXTRA,
    },
    Blueprint {
        id: SchemaId::Asset,
        child: None,
        fields: ASSET_FIELDS,
        extra: ASSET_EXTRA,
    },
    Blueprint {
        id: SchemaId::Layer,
        child: None,
        fields: LAYER_FIELDS,
        extra: LAYER_EXTRA,
    },
    Blueprint {
        id: SchemaId::Contents,
        child: Some(SchemaId::Contents),
        fields: CONTENTS_FIELDS,
        extra: CONTENTS_EXTRA,
    },
    Blueprint {
        id: SchemaId::Transform,
        child: None,
        fields: TRANSFORM_FIELDS,
        extra: TRANSFORM_EXTRA,
    },
    Blueprint {
        id: SchemaId::Effect,
        child: Some(SchemaId::Effect),
        fields: EFFECT_FIELDS,
        extra: EFFECT_EXTRA,
    },
    Blueprint {
        id: SchemaId::Property,
        child: None,
        fields: PROPERTY_FIELDS,
        extra: PROPERTY_EXTRA,
    },
    Blueprint {
        id: SchemaId::Keyframe,
        child: None,
        fields: KEYFRAME_FIELDS,
        extra: KEYFRAME_EXTRA,
    },
];
