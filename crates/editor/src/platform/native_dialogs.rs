// Chunk: docs/chunks/appkit_shell - NSAlert / NSOpenPanel / NSSavePanel dialogs
//!
//! [`Dialogs`] backed by native modal alerts and panels.
//!
//! Humble object: each method shows one modal and translates the response.
//! All business logic stays in the controller.
//!
//! File panels get an accessory pop-up listing the request's filters. The
//! selected filter sets the panel's allowed file types.

use std::path::{Path, PathBuf};

use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{define_class, msg_send, sel, DefinedClass, MainThreadOnly};
use objc2_app_kit::{
    NSAlert, NSAlertFirstButtonReturn, NSAlertSecondButtonReturn, NSAlertStyle,
    NSModalResponseOK, NSOpenPanel, NSPopUpButton, NSSavePanel,
};
use objc2_foundation::{
    MainThreadMarker, NSArray, NSObject, NSObjectProtocol, NSPoint, NSRect, NSSize, NSString,
    NSURL,
};

use crate::dialogs::{
    allowed_extension, ConfirmChoice, Dialogs, FileFilter, OpenRequest, SaveRequest,
    UNSAVED_MESSAGE, UNSAVED_TITLE,
};

struct FilterSwitcherIvars {
    panel: Retained<NSSavePanel>,
    filters: Vec<FileFilter>,
}

define_class!(
    // SAFETY: FilterSwitcher follows the Objective-C memory management rules
    // and is only accessed from the main thread
    #[unsafe(super = NSObject)]
    #[thread_kind = MainThreadOnly]
    #[ivars = FilterSwitcherIvars]
    #[name = "EditXFilterSwitcher"]
    struct FilterSwitcher;

    // SAFETY: NSObjectProtocol is correctly implemented - we inherit from NSObject
    unsafe impl NSObjectProtocol for FilterSwitcher {}

    impl FilterSwitcher {
        #[unsafe(method(filterChanged:))]
        fn filter_changed(&self, sender: &NSPopUpButton) {
            let selected = usize::try_from(sender.indexOfSelectedItem()).unwrap_or(usize::MAX);
            self.apply(selected);
        }
    }
);

impl FilterSwitcher {
    fn new(
        mtm: MainThreadMarker,
        panel: Retained<NSSavePanel>,
        filters: Vec<FileFilter>,
    ) -> Retained<Self> {
        let this = mtm.alloc::<Self>();
        let this = this.set_ivars(FilterSwitcherIvars { panel, filters });
        unsafe { msg_send![super(this), init] }
    }

    /// Restricts the panel to the extension of `filters[selected]`; a
    /// wildcard filter clears the restriction.
    #[allow(deprecated)]
    fn apply(&self, selected: usize) {
        let ivars = self.ivars();
        let extension = allowed_extension(&ivars.filters, selected);
        tracing::debug!(selected, ?extension, "file filter selected");
        let types = extension.map(|ext| NSArray::from_retained_slice(&[NSString::from_str(ext)]));
        // SAFETY: a nil array allows every file type.
        unsafe { ivars.panel.setAllowedFileTypes(types.as_deref()) };
    }
}

/// Adds a filter pop-up to `panel` and selects the first filter.
///
/// The returned switcher is the pop-up's target and must outlive `runModal`.
fn attach_filters(
    mtm: MainThreadMarker,
    panel: Retained<NSSavePanel>,
    filters: &[FileFilter],
) -> Option<Retained<FilterSwitcher>> {
    if filters.is_empty() {
        return None;
    }
    let popup = NSPopUpButton::initWithFrame_pullsDown(
        mtm.alloc(),
        NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(240.0, 26.0)),
        false,
    );
    for filter in filters {
        popup.addItemWithTitle(&NSString::from_str(&filter.label));
    }
    popup.sizeToFit();
    panel.setAccessoryView(Some(&popup));

    let switcher = FilterSwitcher::new(mtm, panel, filters.to_vec());
    let target: &AnyObject = &switcher;
    // SAFETY: `filterChanged:` is implemented by the switcher, which the
    // caller keeps alive while the panel runs.
    unsafe {
        popup.setTarget(Some(target));
        popup.setAction(Some(sel!(filterChanged:)));
    }
    switcher.apply(0);
    Some(switcher)
}

pub struct NativeDialogs {
    mtm: MainThreadMarker,
}

impl NativeDialogs {
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self { mtm }
    }

    fn alert(&self, style: NSAlertStyle, title: &str, message: &str) -> Retained<NSAlert> {
        let alert = NSAlert::new(self.mtm);
        alert.setAlertStyle(style);
        alert.setMessageText(&NSString::from_str(title));
        alert.setInformativeText(&NSString::from_str(message));
        alert
    }

    fn show(&self, style: NSAlertStyle, title: &str, message: &str) {
        let alert = self.alert(style, title, message);
        alert.addButtonWithTitle(&NSString::from_str("OK"));
        alert.runModal();
    }
}

fn directory_url(dir: &Path) -> Option<Retained<NSURL>> {
    let absolute = dir.canonicalize().ok()?;
    let path = NSString::from_str(&absolute.to_string_lossy());
    Some(NSURL::fileURLWithPath(&path))
}

fn url_to_path(url: Option<Retained<NSURL>>) -> Option<PathBuf> {
    url.and_then(|url| url.path().map(|p| PathBuf::from(p.to_string())))
}

impl Dialogs for NativeDialogs {
    fn confirm_unsaved(&mut self, document_name: &str) -> ConfirmChoice {
        let alert = self.alert(NSAlertStyle::Warning, UNSAVED_TITLE, UNSAVED_MESSAGE);
        alert.addButtonWithTitle(&NSString::from_str("Save"));
        alert.addButtonWithTitle(&NSString::from_str("Don't Save"));
        alert.addButtonWithTitle(&NSString::from_str("Cancel"));

        let response = alert.runModal();
        let choice = if response == NSAlertFirstButtonReturn {
            ConfirmChoice::Save
        } else if response == NSAlertSecondButtonReturn {
            ConfirmChoice::Discard
        } else {
            ConfirmChoice::Cancel
        };
        tracing::debug!(document = document_name, ?choice, "unsaved changes answered");
        choice
    }

    fn pick_open_path(&mut self, request: &OpenRequest) -> Option<PathBuf> {
        let panel = NSOpenPanel::openPanel(self.mtm);
        panel.setCanChooseFiles(true);
        panel.setCanChooseDirectories(false);
        panel.setAllowsMultipleSelection(false);
        panel.setTitle(&NSString::from_str(&request.title));
        panel.setMessage(Some(&NSString::from_str(&request.title)));
        if let Some(url) = directory_url(&request.initial_dir) {
            panel.setDirectoryURL(Some(&url));
        }
        panel.setAccessoryViewDisclosed(true);
        let save_panel = Retained::into_super(panel.clone());
        let _switcher = attach_filters(self.mtm, save_panel, &request.filters);

        if panel.runModal() == NSModalResponseOK {
            url_to_path(panel.URL())
        } else {
            None
        }
    }

    fn pick_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        let panel = NSSavePanel::savePanel(self.mtm);
        panel.setCanCreateDirectories(true);
        panel.setAllowsOtherFileTypes(true);
        panel.setTitle(&NSString::from_str(&request.title));
        panel.setMessage(Some(&NSString::from_str(&request.title)));
        panel.setNameFieldStringValue(&NSString::from_str(&request.initial_name));
        if let Some(url) = directory_url(&request.initial_dir) {
            panel.setDirectoryURL(Some(&url));
        }
        let _switcher = attach_filters(self.mtm, panel.clone(), &request.filters);

        if panel.runModal() == NSModalResponseOK {
            url_to_path(panel.URL())
        } else {
            None
        }
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.show(NSAlertStyle::Informational, title, message);
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.show(NSAlertStyle::Critical, title, message);
    }
}
