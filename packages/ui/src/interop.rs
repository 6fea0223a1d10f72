//! Bindings to the third-party browser scripts: Razorpay checkout, face-api.js,
//! the Web Speech API and Google Identity Services. Off the web every call
//! fails.

#[cfg(target_arch = "wasm32")]
use store::makeup::FaceLandmarks;
pub use store::CheckoutOutcome;
use store::CheckoutOptions;

pub const RAZORPAY_SRC: &str = "https://checkout.razorpay.com/v1/checkout.js";
#[cfg(target_arch = "wasm32")]
const FACE_API_SRC: &str = "https://cdn.jsdelivr.net/npm/face-api.js@0.22.2/dist/face-api.min.js";
#[cfg(target_arch = "wasm32")]
const GOOGLE_GSI_SRC: &str = "https://accounts.google.com/gsi/client";

#[cfg(not(target_arch = "wasm32"))]
const UNSUPPORTED: &str = "This feature needs a web browser";

#[cfg(target_arch = "wasm32")]
mod js {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    #[wasm_bindgen(inline_js = r#"
const loading = {};

export function load_script(src) {
  if (!loading[src]) {
    loading[src] = new Promise((resolve, reject) => {
      const tag = document.createElement('script');
      tag.src = src;
      tag.async = true;
      tag.onload = () => resolve();
      tag.onerror = () => {
        delete loading[src];
        tag.remove();
        reject(new Error('Could not load ' + src));
      };
      document.head.appendChild(tag);
    });
  }
  return loading[src];
}

export function open_checkout(options, onPaid, onFailed, onClosed) {
  if (!window.Razorpay) {
    throw new Error('Payment gateway is not available');
  }
  const rzp = new window.Razorpay(Object.assign({}, options, {
    handler: (response) => onPaid(response),
    modal: { ondismiss: () => onClosed() },
  }));
  rzp.on('payment.failed', (response) => {
    const err = response && response.error;
    onFailed((err && err.description) || 'Payment failed');
  });
  rzp.open();
}

let modelsReady = null;

export async function detect_landmarks(modelsUrl, image) {
  const faceapi = window.faceapi;
  if (!faceapi) {
    throw new Error('Face detection is not available');
  }
  if (!modelsReady) {
    modelsReady = Promise.all([
      faceapi.nets.tinyFaceDetector.loadFromUri(modelsUrl),
      faceapi.nets.faceLandmark68Net.loadFromUri(modelsUrl),
    ]).catch((e) => {
      modelsReady = null;
      throw e;
    });
  }
  await modelsReady;
  const found = await faceapi
    .detectAllFaces(image, new faceapi.TinyFaceDetectorOptions())
    .withFaceLandmarks();
  return found.map((f) => ({
    points: f.landmarks.positions.map((p) => ({ x: p.x, y: p.y })),
  }));
}

export function listen_once(lang) {
  const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
  if (!Recognition) {
    return Promise.reject(new Error('Voice commands are not supported in this browser'));
  }
  return new Promise((resolve, reject) => {
    const rec = new Recognition();
    rec.lang = lang;
    rec.interimResults = false;
    rec.maxAlternatives = 1;
    rec.onresult = (event) => resolve(event.results[0][0].transcript);
    rec.onerror = (event) => reject(new Error(event.error || 'Voice recognition failed'));
    rec.onend = () => reject(new Error('No speech detected'));
    rec.start();
  });
}

export function render_google_button(clientId, elementId, onCredential) {
  const gis = window.google && window.google.accounts && window.google.accounts.id;
  if (!gis) {
    throw new Error('Google sign-in is not available');
  }
  gis.initialize({ client_id: clientId, callback: (response) => onCredential(response.credential) });
  gis.renderButton(document.getElementById(elementId), { theme: 'outline', size: 'large', width: 280 });
}
"#)]
    extern "C" {
        #[wasm_bindgen(catch)]
        pub async fn load_script(src: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub fn open_checkout(
            options: &JsValue,
            on_paid: &JsValue,
            on_failed: &JsValue,
            on_closed: &JsValue,
        ) -> Result<(), JsValue>;

        #[wasm_bindgen(catch)]
        pub async fn detect_landmarks(models_url: &str, image: &web_sys::HtmlImageElement) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub async fn listen_once(lang: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        pub fn render_google_button(client_id: &str, element_id: &str, on_credential: &JsValue) -> Result<(), JsValue>;
    }

    /// `Error.message` when there is one.
    pub fn describe(err: JsValue) -> String {
        err.dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| "Unknown browser error".to_string())
    }
}

/// Insert a `<script>` once; concurrent and repeated calls share the same load.
pub async fn load_script(src: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        js::load_script(src).await.map(|_| ()).map_err(js::describe)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = src;
        Err(UNSUPPORTED.to_string())
    }
}

/// Open the Razorpay popup and wait until it is paid or closed. Failed
/// attempts inside the popup do not end it.
pub async fn open_checkout(options: &CheckoutOptions) -> CheckoutOutcome {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use store::{CheckoutEvents, PaymentConfirmation};
        use wasm_bindgen::prelude::*;

        struct Pending {
            events: CheckoutEvents,
            tx: Option<oneshot::Sender<CheckoutOutcome>>,
        }

        fn settle(pending: &Rc<RefCell<Pending>>, outcome: Option<CheckoutOutcome>) {
            let Some(outcome) = outcome else {
                return;
            };
            if let Some(tx) = pending.borrow_mut().tx.take() {
                let _ = tx.send(outcome);
            }
        }

        let js_options = match serde_wasm_bindgen::to_value(options) {
            Ok(v) => v,
            Err(e) => return CheckoutOutcome::Failed(e.to_string()),
        };

        let (tx, rx) = oneshot::channel::<CheckoutOutcome>();
        let pending = Rc::new(RefCell::new(Pending {
            events: CheckoutEvents::new(),
            tx: Some(tx),
        }));

        let paid = pending.clone();
        let on_paid = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let outcome = match serde_wasm_bindgen::from_value::<PaymentConfirmation>(response) {
                Ok(confirmation) => paid.borrow_mut().events.paid(confirmation),
                Err(e) => {
                    let mut state = paid.borrow_mut();
                    state.events.attempt_failed(&format!("Unexpected checkout response: {e}"));
                    state.events.closed()
                }
            };
            settle(&paid, outcome);
        })
        .into_js_value();

        let failed = pending.clone();
        let on_failed = Closure::<dyn FnMut(String)>::new(move |description: String| {
            tracing::warn!("checkout attempt failed: {description}");
            failed.borrow_mut().events.attempt_failed(&description);
        })
        .into_js_value();

        let closed = pending.clone();
        let on_closed = Closure::<dyn FnMut()>::new(move || {
            let outcome = closed.borrow_mut().events.closed();
            settle(&closed, outcome);
        })
        .into_js_value();

        if let Err(e) = js::open_checkout(&js_options, &on_paid, &on_failed, &on_closed) {
            return CheckoutOutcome::Failed(js::describe(e));
        }
        rx.await.unwrap_or(CheckoutOutcome::Dismissed)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = options;
        CheckoutOutcome::Failed(UNSUPPORTED.to_string())
    }
}

/// Run face-api.js over a loaded image.
#[cfg(target_arch = "wasm32")]
pub async fn detect_faces(models_url: &str, image: &web_sys::HtmlImageElement) -> Result<Vec<FaceLandmarks>, String> {
    load_script(FACE_API_SRC).await?;
    let found = js::detect_landmarks(models_url, image).await.map_err(js::describe)?;
    serde_wasm_bindgen::from_value(found).map_err(|e| e.to_string())
}

/// One utterance from the microphone.
pub async fn listen_once() -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let heard = js::listen_once("en-IN").await.map_err(js::describe)?;
        heard.as_string().ok_or_else(|| "No speech detected".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(UNSUPPORTED.to_string())
    }
}

/// Render the Google button into `element_id`. Each credential the user
/// produces is sent down the returned channel.
pub async fn google_button(
    client_id: &str,
    element_id: &str,
) -> Result<futures::channel::mpsc::UnboundedReceiver<String>, String> {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::prelude::*;

        load_script(GOOGLE_GSI_SRC).await?;
        let on_credential = Closure::<dyn FnMut(String)>::new(move |credential: String| {
            let _ = tx.unbounded_send(credential);
        })
        .into_js_value();
        js::render_google_button(client_id, element_id, &on_credential).map_err(js::describe)?;
        Ok(rx)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (client_id, element_id, tx, rx);
        Err(UNSUPPORTED.to_string())
    }
}
