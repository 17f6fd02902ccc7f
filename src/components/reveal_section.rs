use log::debug;
use yew::prelude::*;

use crate::motion::clock::use_reveal_clock;
use crate::motion::reveal::Reveal;
use crate::motion::visibility::{use_in_view, use_mounted};

/// What latches a section open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trigger {
    /// First time the section intersects the viewport.
    #[default]
    InView,
    /// As soon as the section mounts.
    Mount,
}

/// Shared with the [`RevealItem`]s of a section so they can follow its clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub reveal: Reveal,
    pub since_reveal: Option<f64>,
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub reveal: Reveal,
    #[prop_or_default]
    pub trigger: Trigger,
    /// Number of staggered [`RevealItem`]s inside, used to know when to stop ticking.
    #[prop_or_default]
    pub items: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let mounted = use_mounted();

    let visibility = match props.trigger {
        Trigger::InView => in_view,
        Trigger::Mount => mounted,
    };
    let since_reveal = use_reveal_clock(visibility, props.reveal.span_ms(props.items));

    {
        let id = props.id.clone();
        use_effect_with_deps(
            move |revealed: &bool| {
                if *revealed {
                    debug!("revealed section {}", id.as_deref().unwrap_or("<anonymous>"));
                }
                || ()
            },
            visibility.is_revealed(),
        );
    }

    let frame = RevealFrame {
        reveal: props.reveal,
        since_reveal,
    };

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal-section", props.class.clone())}
            style={props.reveal.pose(since_reveal).to_css()}
        >
            <ContextProvider<RevealFrame> context={frame}>
                { for props.children.iter() }
            </ContextProvider<RevealFrame>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// One staggered child. Outside a [`RevealSection`] it renders at rest.
#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let style = use_context::<RevealFrame>()
        .map(|frame| frame.reveal.item_pose(props.index, frame.since_reveal).to_css());

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
