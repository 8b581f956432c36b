//! The shared DHTML element surface.
//!
//! The stub documents the generic element members directly on `ul`; here
//! they live on `Element` so other elements can derive the same surface.
//! Grouped by kind: default-valued properties, no-op methods, `on*`
//! event-handler hooks. Names, types, parameter lists, and reference URLs
//! are carried exactly as documented, including the stub generator's
//! self-referential parameter types (`appendChild(oNode: appendChild)`).

use domdex_registry::{ElementDescriptor, MemberDescriptor, TypeRef};

use crate::{ELEMENT, OBJECT, stamp};

pub(crate) fn element_descriptor() -> ElementDescriptor {
    ElementDescriptor::new(ELEMENT)
        .super_type(OBJECT)
        .members_from(stamp(properties()))
        .members_from(stamp(methods()))
        .members_from(stamp(event_hooks()))
}

fn properties() -> Vec<MemberDescriptor> {
    vec![
        MemberDescriptor::property("accessKey", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533062.aspx"),
        MemberDescriptor::property("blockDirection", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533508.aspx"),
        MemberDescriptor::property("canHaveChildren", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533546.aspx"),
        MemberDescriptor::property("canHaveHTML", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537836.aspx"),
        MemberDescriptor::property("className", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533560.aspx"),
        MemberDescriptor::property("clientHeight", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533563.aspx"),
        MemberDescriptor::property("clientLeft", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533564.aspx"),
        MemberDescriptor::property("offsetLeft", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534200.aspx"),
        MemberDescriptor::property("clientTop", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533565.aspx"),
        MemberDescriptor::property("offsetTop", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534303.aspx"),
        MemberDescriptor::property("clientWidth", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533566.aspx"),
        MemberDescriptor::property("contentEditable", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537837.aspx"),
        MemberDescriptor::property("dir", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533728.aspx"),
        MemberDescriptor::property("disabled", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533734.aspx"),
        MemberDescriptor::property("firstChild", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533755.aspx"),
        MemberDescriptor::property("childNodes", TypeRef::named("childNodes"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537445.aspx"),
        MemberDescriptor::property("hideFocus", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533783.aspx"),
        MemberDescriptor::property("id", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533880.aspx"),
        MemberDescriptor::property("innerHTML", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533897.aspx"),
        MemberDescriptor::property("innerText", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533899.aspx"),
        MemberDescriptor::property("isContentEditable", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537838.aspx"),
        MemberDescriptor::property("isDisabled", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533902.aspx"),
        MemberDescriptor::property("isMultiLine", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537839.aspx"),
        MemberDescriptor::property("isTextEdit", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533920.aspx"),
        MemberDescriptor::property("TextRange", TypeRef::named("TextRange"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms535872.aspx"),
        MemberDescriptor::property("lang", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533935.aspx"),
        MemberDescriptor::property("language", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533940.aspx"),
        MemberDescriptor::property("lastChild", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533943.aspx"),
        MemberDescriptor::property("nextSibling", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534189.aspx"),
        MemberDescriptor::property("nodeName", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534190.aspx"),
        MemberDescriptor::property("nodeType", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534191.aspx"),
        MemberDescriptor::property("nodeValue", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534192.aspx"),
        MemberDescriptor::property("offsetHeight", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534199.aspx"),
        MemberDescriptor::property("offsetParent", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534302.aspx"),
        MemberDescriptor::property("offsetWidth", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534304.aspx"),
        MemberDescriptor::property("onOffBehavior", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533630.aspx"),
        MemberDescriptor::property("outerHTML", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534310.aspx"),
        MemberDescriptor::property("outerText", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534311.aspx"),
        MemberDescriptor::property("ownerDocument", TypeRef::named("document"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534315.aspx"),
        MemberDescriptor::property("document", TypeRef::named("document"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms531073.aspx"),
        MemberDescriptor::property("parentElement", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534327.aspx"),
        MemberDescriptor::property("parentNode", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534328.aspx"),
        MemberDescriptor::property("parentTextEdit", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534330.aspx"),
        MemberDescriptor::property("previousSibling", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534350.aspx"),
        MemberDescriptor::property("readyState", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534358.aspx"),
        MemberDescriptor::property("scopeName", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534388.aspx"),
        MemberDescriptor::property("scrollHeight", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534615.aspx"),
        MemberDescriptor::property("scrollLeft", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534617.aspx"),
        MemberDescriptor::property("scrollTop", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534618.aspx"),
        MemberDescriptor::property("scrollWidth", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534619.aspx"),
        MemberDescriptor::property("sourceIndex", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534635.aspx"),
        MemberDescriptor::property("all", TypeRef::named("all"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537434.aspx"),
        MemberDescriptor::property("tabIndex", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534654.aspx"),
        MemberDescriptor::property("tagName", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534657.aspx"),
        MemberDescriptor::property("tagUrn", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534658.aspx"),
        MemberDescriptor::property("title", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534683.aspx"),
        MemberDescriptor::property("uniqueID", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534704.aspx"),
        MemberDescriptor::property("attribute", TypeRef::named("attribute"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms535187.aspx"),
        MemberDescriptor::property("name", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534184.aspx"),
        MemberDescriptor::property("TextRectangle", TypeRef::named("TextRectangle"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms535906.aspx"),
        MemberDescriptor::property("activeElement", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533065.aspx"),
        MemberDescriptor::property("attributes", TypeRef::named("attributes"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537438.aspx"),
        MemberDescriptor::property("behaviorUrns", TypeRef::named("behaviorUrns"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537439.aspx"),
        MemberDescriptor::property("TextNode", TypeRef::named("TextNode"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms535905.aspx"),
        MemberDescriptor::property("children", TypeRef::named("children"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537446.aspx"),
    ]
}

fn methods() -> Vec<MemberDescriptor> {
    vec![
        MemberDescriptor::method("addBehavior")
            .param("sUrl", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms535922.aspx"),
        MemberDescriptor::method("appendChild")
            .param("oNode", TypeRef::named("appendChild"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms535934.aspx"),
        MemberDescriptor::method("applyElement")
            .param("oNewElement", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536341.aspx"),
        MemberDescriptor::method("attachEvent")
            .param("sEvent", TypeRef::String)
            .param("fpNotify", TypeRef::Boolean)
            .returns(TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536343.aspx"),
        MemberDescriptor::method("blur")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536347.aspx"),
        MemberDescriptor::method("clearAttributes")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536350.aspx"),
        MemberDescriptor::method("click")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536363.aspx"),
        MemberDescriptor::method("cloneNode")
            .param("bCloneChildren", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536365.aspx"),
        MemberDescriptor::method("componentFromPoint")
            .param("iCoordX", TypeRef::Number)
            .param("iCoordY", TypeRef::Number)
            .returns(TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536375.aspx"),
        MemberDescriptor::method("contains")
            .param("oElement", TypeRef::Boolean)
            .returns(TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536377.aspx"),
        MemberDescriptor::method("detachEvent")
            .param("sEvent", TypeRef::String)
            .param("fpNotify", TypeRef::named("attachEvent"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536411.aspx"),
        MemberDescriptor::method("dragDrop")
            .returns(TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536415.aspx"),
        MemberDescriptor::method("fireEvent")
            .param("sEvent", TypeRef::String)
            .param("oEventObject", TypeRef::named("event"))
            .returns(TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536423.aspx"),
        MemberDescriptor::method("focus")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536425.aspx"),
        MemberDescriptor::method("getAdjacentText")
            .param("sWhere", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536427.aspx"),
        MemberDescriptor::method("getAttribute")
            .param("sAttrName", TypeRef::String)
            .param("iFlags", TypeRef::Number)
            .returns(TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536429.aspx"),
        MemberDescriptor::method("getAttributeNode")
            .param("sName", TypeRef::String)
            .returns(TypeRef::named("attribute"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536430.aspx"),
        MemberDescriptor::method("getBoundingClientRect")
            .returns(TypeRef::named("TextRectangle"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536433.aspx"),
        MemberDescriptor::method("getClientRects")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536435.aspx"),
        MemberDescriptor::method("getElementsByTagName")
            .param("sTagName", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536439.aspx"),
        MemberDescriptor::method("getExpression")
            .param("sPropertyName", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/aa358797.aspx"),
        MemberDescriptor::method("hasChildNodes")
            .returns(TypeRef::Html)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536445.aspx"),
        MemberDescriptor::method("insertAdjacentElement")
            .param("sWhere", TypeRef::String)
            .param("oElement", TypeRef::named("insertAdjacentElement"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536451.aspx"),
        MemberDescriptor::method("insertAdjacentHTML")
            .param("sWhere", TypeRef::String)
            .param("sText", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536452.aspx"),
        MemberDescriptor::method("insertAdjacentText")
            .param("sWhere", TypeRef::String)
            .param("sText", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536453.aspx"),
        MemberDescriptor::method("insertBefore")
            .param("oNewNode", TypeRef::Object)
            .param("oChildNode", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536454.aspx"),
        MemberDescriptor::method("mergeAttributes")
            .param("oSource", TypeRef::Object)
            .param("bPreserve", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536614.aspx"),
        MemberDescriptor::method("normalize")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536646.aspx"),
        MemberDescriptor::method("releaseCapture")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536689.aspx"),
        MemberDescriptor::method("removeAttribute")
            .param("sName", TypeRef::String)
            .param("iCaseSensitive", TypeRef::Number)
            .returns(TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536696.aspx"),
        MemberDescriptor::method("removeAttributeNode")
            .param("oSrcAttribute", TypeRef::named("attribute"))
            .returns(TypeRef::named("attribute"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536698.aspx"),
        MemberDescriptor::method("removeBehavior")
            .param("iID", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536700.aspx"),
        MemberDescriptor::method("removeChild")
            .param("oNode", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536702.aspx"),
        MemberDescriptor::method("removeExpression")
            .param("sPropertyName", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/aa358798.aspx"),
        MemberDescriptor::method("removeNode")
            .param("bRemoveChildren", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536708.aspx"),
        MemberDescriptor::method("replaceAdjacentText")
            .param("sWhere", TypeRef::String)
            .param("sReplaceText", TypeRef::String)
            .returns(TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536714.aspx"),
        MemberDescriptor::method("replaceChild")
            .param("oNewNode", TypeRef::Object)
            .param("oChildNode", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536716.aspx"),
        MemberDescriptor::method("replaceNode")
            .param("oNewNode", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536719.aspx"),
        MemberDescriptor::method("scrollIntoView")
            .param("bAlignToTop", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536730.aspx"),
        MemberDescriptor::method("setActive")
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536738.aspx"),
        MemberDescriptor::method("setAttribute")
            .param("sName", TypeRef::String)
            .param("vValue", TypeRef::Number)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536739.aspx"),
        MemberDescriptor::method("setAttributeNode")
            .param("oSrcAttribute", TypeRef::named("attribute"))
            .returns(TypeRef::named("attribute"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536741.aspx"),
        MemberDescriptor::method("setCapture")
            .param("bContainerCapture", TypeRef::Boolean)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536742.aspx"),
        MemberDescriptor::method("setExpression")
            .param("sPropertyName", TypeRef::String)
            .param("sExpression", TypeRef::String)
            .param("sLanguage", TypeRef::String)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms531196.aspx"),
        MemberDescriptor::method("swapNode")
            .param("oNode", TypeRef::Object)
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536774.aspx"),
    ]
}

fn event_hooks() -> Vec<MemberDescriptor> {
    vec![
        MemberDescriptor::event("onblur", TypeRef::named("onblur"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536909.aspx"),
        MemberDescriptor::event("onclick", TypeRef::named("onclick"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536913.aspx"),
        MemberDescriptor::event("onfocus", TypeRef::named("onfocus"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536934.aspx"),
        MemberDescriptor::event("onactivate", TypeRef::named("onactivate"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536787.aspx"),
        MemberDescriptor::event("onbeforeactivate", TypeRef::named("onbeforeactivate"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536791.aspx"),
        MemberDescriptor::event("onbeforecopy", TypeRef::named("onbeforecopy"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536901.aspx"),
        MemberDescriptor::event("onbeforecut", TypeRef::named("onbeforecut"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536902.aspx"),
        MemberDescriptor::event("onbeforedeactivate", TypeRef::named("onbeforedeactivate"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536903.aspx"),
        MemberDescriptor::event("onbeforeeditfocus", TypeRef::named("onbeforeeditfocus"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536904.aspx"),
        MemberDescriptor::event("onbeforepaste", TypeRef::named("onbeforepaste"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536905.aspx"),
        MemberDescriptor::event("oncontextmenu", TypeRef::named("oncontextmenu"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536914.aspx"),
        MemberDescriptor::event("oncontrolselect", TypeRef::named("oncontrolselect"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms537844.aspx"),
        MemberDescriptor::event("oncopy", TypeRef::named("oncopy"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536916.aspx"),
        MemberDescriptor::event("oncut", TypeRef::named("oncut"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536917.aspx"),
        MemberDescriptor::event("ondblclick", TypeRef::named("ondblclick"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536921.aspx"),
        MemberDescriptor::event("ondeactivate", TypeRef::named("ondeactivate"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536922.aspx"),
        MemberDescriptor::event("ondrag", TypeRef::named("ondrag"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536923.aspx"),
        MemberDescriptor::event("ondragend", TypeRef::named("ondragend"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536924.aspx"),
        MemberDescriptor::event("ondragenter", TypeRef::named("ondragenter"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536925.aspx"),
        MemberDescriptor::event("ondragleave", TypeRef::named("ondragleave"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536926.aspx"),
        MemberDescriptor::event("ondragover", TypeRef::named("ondragover"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536927.aspx"),
        MemberDescriptor::event("ondragstart", TypeRef::named("ondragstart"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536928.aspx"),
        MemberDescriptor::event("ondrop", TypeRef::named("ondrop"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536929.aspx"),
        MemberDescriptor::event("onfocusin", TypeRef::named("onfocusin"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536935.aspx"),
        MemberDescriptor::event("onfocusout", TypeRef::named("onfocusout"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536936.aspx"),
        MemberDescriptor::event("onhelp", TypeRef::named("onhelp"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536937.aspx"),
        MemberDescriptor::event("onkeydown", TypeRef::named("onkeydown"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536938.aspx"),
        MemberDescriptor::event("onkeypress", TypeRef::named("onkeypress"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536939.aspx"),
        MemberDescriptor::event("onkeyup", TypeRef::named("onkeyup"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536940.aspx"),
        MemberDescriptor::event("onlayoutcomplete", TypeRef::named("onlayoutcomplete"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536941.aspx"),
        MemberDescriptor::event("onlosecapture", TypeRef::named("onlosecapture"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536943.aspx"),
        MemberDescriptor::event("onmousedown", TypeRef::named("onmousedown"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536944.aspx"),
        MemberDescriptor::event("onmouseenter", TypeRef::named("onmouseenter"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536945.aspx"),
        MemberDescriptor::event("onmouseleave", TypeRef::named("onmouseleave"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536946.aspx"),
        MemberDescriptor::event("onmousemove", TypeRef::named("onmousemove"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536947.aspx"),
        MemberDescriptor::event("onmouseout", TypeRef::named("onmouseout"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536948.aspx"),
        MemberDescriptor::event("onmouseover", TypeRef::named("onmouseover"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536949.aspx"),
        MemberDescriptor::event("onmouseup", TypeRef::named("onmouseup"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536950.aspx"),
        MemberDescriptor::event("onmousewheel", TypeRef::named("onmousewheel"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536951.aspx"),
        MemberDescriptor::event("onmove", TypeRef::named("onmove"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536952.aspx"),
        MemberDescriptor::event("onmoveend", TypeRef::named("onmoveend"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536953.aspx"),
        MemberDescriptor::event("onmovestart", TypeRef::named("onmovestart"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536954.aspx"),
        MemberDescriptor::event("onpaste", TypeRef::named("onpaste"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536955.aspx"),
        MemberDescriptor::event("onpropertychange", TypeRef::named("onpropertychange"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536956.aspx"),
        MemberDescriptor::event("onreadystatechange", TypeRef::named("onreadystatechange"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536957.aspx"),
        MemberDescriptor::event("onresize", TypeRef::named("onresize"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536959.aspx"),
        MemberDescriptor::event("onresizeend", TypeRef::named("onresizeend"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536960.aspx"),
        MemberDescriptor::event("onresizestart", TypeRef::named("onresizestart"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536961.aspx"),
        MemberDescriptor::event("onselectstart", TypeRef::named("onselectstart"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms536969.aspx"),
        MemberDescriptor::event("ontimeerror", TypeRef::named("ontimeerror"))
            .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533588.aspx"),
    ]
}
