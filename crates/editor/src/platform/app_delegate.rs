// Chunk: docs/chunks/appkit_shell - NSTextView window, menu bar, native dialogs
//!
//! Application delegate: owns the window, the widgets and the
//! [`EditorContext`].
//!
//! All state sits behind `RefCell` and is only touched on the main thread.
//! A menu action borrows the context for the duration of one command; modal
//! dialogs run inside that borrow.

use std::cell::RefCell;

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, ProtocolObject};
use objc2::{define_class, msg_send, DefinedClass, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSApplicationDelegate, NSApplicationTerminateReply, NSAutoresizingMaskOptions,
    NSBackingStoreType, NSFont, NSMenuItem, NSScrollView, NSTextField, NSTextView, NSWindow,
    NSWindowDelegate, NSWindowStyleMask,
};
use objc2_foundation::{
    MainThreadMarker, NSNotification, NSObject, NSObjectProtocol, NSPoint, NSRect, NSSize,
    NSString,
};

use crate::commands::{CommandOutcome, MenuCommand};
use crate::config::EditorConfig;
use crate::controller::EditorContext;
use crate::error::DocumentError;

use super::menu_bar;
use super::native_dialogs::NativeDialogs;
use super::text_view::TextViewArea;

const STATUS_BAR_HEIGHT: f64 = 22.0;

type Context = EditorContext<TextViewArea, NativeDialogs>;

pub struct AppDelegateIvars {
    config: EditorConfig,
    window: RefCell<Option<Retained<NSWindow>>>,
    status: RefCell<Option<Retained<NSTextField>>>,
    context: RefCell<Option<Context>>,
}

define_class!(
    // SAFETY: AppDelegate follows the Objective-C memory management rules
    // and is only accessed from the main thread
    #[unsafe(super = NSObject)]
    #[thread_kind = MainThreadOnly]
    #[ivars = AppDelegateIvars]
    #[name = "EditXAppDelegate"]
    pub struct AppDelegate;

    // SAFETY: NSObjectProtocol is correctly implemented - we inherit from NSObject
    unsafe impl NSObjectProtocol for AppDelegate {}

    // SAFETY: NSApplicationDelegate methods match the protocol signatures
    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn application_did_finish_launching(&self, _notification: &NSNotification) {
            let mtm = MainThreadMarker::from(self);
            self.setup_window(mtm);
        }

        #[unsafe(method(applicationShouldTerminateAfterLastWindowClosed:))]
        fn application_should_terminate_after_last_window_closed(
            &self,
            _sender: &NSApplication,
        ) -> bool {
            true
        }

        #[unsafe(method(applicationShouldTerminate:))]
        fn application_should_terminate(
            &self,
            _sender: &NSApplication,
        ) -> NSApplicationTerminateReply {
            if self.ivars().context.try_borrow().is_ok_and(|slot| slot.is_none()) {
                return NSApplicationTerminateReply::TerminateNow;
            }
            let outcome = self.with_context(|ctx| ctx.request_termination());
            self.refresh_chrome();
            if outcome == CommandOutcome::Quit {
                NSApplicationTerminateReply::TerminateNow
            } else {
                NSApplicationTerminateReply::TerminateCancel
            }
        }
    }

    // SAFETY: NSWindowDelegate methods match the protocol signatures
    unsafe impl NSWindowDelegate for AppDelegate {
        #[unsafe(method(windowShouldClose:))]
        fn window_should_close(&self, _sender: &NSWindow) -> bool {
            let outcome = self.with_context(|ctx| ctx.request_quit());
            self.refresh_chrome();
            outcome == CommandOutcome::Quit
        }
    }

    impl AppDelegate {
        #[unsafe(method(menuCommand:))]
        fn menu_command(&self, sender: &NSMenuItem) {
            let Some(command) = MenuCommand::from_tag(sender.tag()) else {
                tracing::warn!(tag = sender.tag(), "menu item with unknown tag");
                return;
            };
            self.run_command(command);
        }
    }
);

impl AppDelegate {
    pub fn new(mtm: MainThreadMarker, config: EditorConfig) -> Retained<Self> {
        let this = mtm.alloc::<Self>();
        let this = this.set_ivars(AppDelegateIvars {
            config,
            window: RefCell::new(None),
            status: RefCell::new(None),
            context: RefCell::new(None),
        });
        unsafe { msg_send![super(this), init] }
    }

    fn setup_window(&self, mtm: MainThreadMarker) {
        let config = &self.ivars().config;
        let (width, height) = config.window_size;
        let content_rect = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));

        let style_mask = NSWindowStyleMask::Titled
            | NSWindowStyleMask::Closable
            | NSWindowStyleMask::Resizable
            | NSWindowStyleMask::Miniaturizable;

        let window = unsafe {
            NSWindow::initWithContentRect_styleMask_backing_defer(
                mtm.alloc::<NSWindow>(),
                content_rect,
                style_mask,
                NSBackingStoreType::Buffered,
                false,
            )
        };
        // SAFETY: the window is owned by the ivars, not released on close.
        unsafe { window.setReleasedWhenClosed(false) };
        let (min_width, min_height) = config.min_window_size;
        window.setContentMinSize(NSSize::new(min_width, min_height));
        window.center();
        window.setDelegate(Some(ProtocolObject::from_ref(self)));

        // Status bar along the bottom edge.
        let status = NSTextField::labelWithString(&NSString::from_str(""), mtm);
        status.setFrame(NSRect::new(
            NSPoint::new(6.0, 2.0),
            NSSize::new(width - 12.0, STATUS_BAR_HEIGHT - 4.0),
        ));
        status.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable | NSAutoresizingMaskOptions::ViewMaxYMargin,
        );

        // Text area fills the rest.
        let text_frame = NSRect::new(
            NSPoint::new(0.0, STATUS_BAR_HEIGHT),
            NSSize::new(width, height - STATUS_BAR_HEIGHT),
        );
        let scroll = NSScrollView::initWithFrame(mtm.alloc(), text_frame);
        scroll.setHasVerticalScroller(true);
        scroll.setHasHorizontalScroller(true);
        scroll.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable
                | NSAutoresizingMaskOptions::ViewHeightSizable,
        );

        let text_view = NSTextView::initWithFrame(
            mtm.alloc(),
            NSRect::new(NSPoint::new(0.0, 0.0), text_frame.size),
        );
        text_view.setAllowsUndo(true);
        text_view.setRichText(false);
        text_view.setFont(NSFont::userFixedPitchFontOfSize(config.font_size).as_deref());
        // No wrapping: the text container grows with the longest line.
        text_view.setHorizontallyResizable(true);
        text_view.setMaxSize(NSSize::new(f64::MAX, f64::MAX));
        text_view.setAutoresizingMask(NSAutoresizingMaskOptions::ViewWidthSizable);
        if let Some(container) = unsafe { text_view.textContainer() } {
            container.setWidthTracksTextView(false);
            container.setContainerSize(NSSize::new(f64::MAX, f64::MAX));
        }
        scroll.setDocumentView(Some(&text_view));

        if let Some(content) = window.contentView() {
            content.addSubview(&scroll);
            content.addSubview(&status);
        }
        window.makeFirstResponder(Some(&text_view));

        let app = NSApplication::sharedApplication(mtm);
        let target: &AnyObject = self.as_ref();
        let main_menu = menu_bar::build(mtm, &config.app_name, target);
        app.setMainMenu(Some(&main_menu));

        let context = EditorContext::new(
            TextViewArea::new(text_view),
            NativeDialogs::new(mtm),
            config.clone(),
        );
        *self.ivars().context.borrow_mut() = Some(context);
        *self.ivars().status.borrow_mut() = Some(status);

        window.makeKeyAndOrderFront(None);
        *self.ivars().window.borrow_mut() = Some(window);
        self.refresh_chrome();

        #[allow(deprecated)]
        app.activateIgnoringOtherApps(true);
        tracing::info!("window ready");
    }

    /// Runs `f` against the context, reporting command errors in an alert.
    ///
    /// Returns `Continue` when the context is missing or already in use.
    fn with_context<F>(&self, f: F) -> CommandOutcome
    where
        F: FnOnce(&mut Context) -> Result<CommandOutcome, DocumentError>,
    {
        let Ok(mut slot) = self.ivars().context.try_borrow_mut() else {
            tracing::debug!("command ignored while another is running");
            return CommandOutcome::Continue;
        };
        let Some(ctx) = slot.as_mut() else {
            return CommandOutcome::Continue;
        };

        match f(ctx) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "command failed");
                let title = ctx.config().app_name.clone();
                ctx.dialogs_mut().show_error(&title, &err.to_string());
                CommandOutcome::Continue
            }
        }
    }

    fn run_command(&self, command: MenuCommand) {
        let outcome = self.with_context(|ctx| ctx.dispatch(command));
        self.refresh_chrome();

        if outcome == CommandOutcome::Quit {
            let mtm = MainThreadMarker::from(self);
            // SAFETY: terminate accepts a nil sender.
            unsafe { NSApplication::sharedApplication(mtm).terminate(None) };
        }
    }

    /// Updates the status bar and window title from the document.
    fn refresh_chrome(&self) {
        let Ok(slot) = self.ivars().context.try_borrow() else {
            return;
        };
        let Some(ctx) = slot.as_ref() else {
            return;
        };

        if let Some(status) = self.ivars().status.borrow().as_ref() {
            status.setStringValue(&NSString::from_str(&ctx.status_text()));
        }
        if let Some(window) = self.ivars().window.borrow().as_ref() {
            window.setTitle(&NSString::from_str(&ctx.window_title()));
        }
    }
}
