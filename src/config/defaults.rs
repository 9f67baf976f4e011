//! Starter configuration written by `seogen init`

pub const DEFAULT_CONFIG_YAML: &str = r#"# seogen configuration
brand:
  name: Acme Secure Calls
  website: https://example.com

variable_pools:
  products:
    - Acme Secure Calls
    - Acme Rooms
  competitors:
    - Zoom
    - Skype
    - Google Meet
  use_cases:
    - private business calls
    - remote interviews
    - telehealth consultations
  audiences:
    - small businesses
    - journalists
    - remote teams
  problems:
    - call privacy
    - account fatigue
    - software installs
  goals:
    - secure conversations
    - anonymous meetings
  benefits:
    - end-to-end encryption
    - no sign-up required
  locations:
    - New York
    - London
    - Berlin
  services:
    - secure video calls
    - encrypted voice calls
  topics:
    - private communication
    - browser-based calling
  actions:
    - start an encrypted call
    - share a private room

content_blocks:
  listicle_items:
    - title: No Account Required
      content: Join a call with a single link and skip the sign-up forms entirely.
      benefits:
        - Faster onboarding
        - Nothing to remember
    - title: End-to-End Encryption
      content: Every call is encrypted in the browser before it leaves your device.
      benefits:
        - Private by default
        - No server-side recordings
    - title: Works in Any Browser
      content: Chrome, Firefox, Safari and Edge all work without plugins or downloads.
      benefits:
        - No installs
        - Cross-platform
    - title: Pay Per Use
      content: Only pay for the minutes you actually spend on calls.
      benefits:
        - No subscriptions
        - Predictable costs
    - title: Disposable Rooms
      content: Rooms disappear once the call ends, leaving nothing behind.
      benefits:
        - Minimal data retention

seo:
  keyword_density: 0.02
  min_word_count: 800
  max_word_count: 2500
  organization: Acme
  logo_url: https://example.com/logo.png

html:
  template_path: null

template_distribution:
  listicle: 0.3
  how_to: 0.25
  comparison: 0.2
  ultimate_guide: 0.15
  location_based: 0.1
"#;

pub const DEFAULT_TEMPLATES_YAML: &str = r#"listicle:
  title_patterns:
    - "{number} Reasons {audience} Choose {product} in {year}"
    - "{number} Ways {product} Solves {problem}"
  intro_patterns:
    - "Looking for better {use_case}? Here are {number} reasons {product} stands out for {audience}."
    - "{problem} slows teams down. These {number} features show how {product} fixes it."

how_to:
  title_patterns:
    - "How to {action} with {product} ({year} Guide)"
    - "How to {achieve_goal} in Minutes"
  intro_patterns:
    - "Want to {action}? This guide walks you through it with {product}, step by step."
    - "Getting {achieve_goal} does not have to be hard. Here is how to do it with {product}."

comparison:
  title_patterns:
    - "{product1} vs {product2}: Which Is Better for {use_case}?"
    - "{product1} vs {product2} vs {product3} in {year}"
  intro_patterns:
    - "Choosing between {product1} and {product2} for {use_case}? We compared them feature by feature."

ultimate_guide:
  title_patterns:
    - "The Ultimate Guide to {topic} ({year})"
    - "{topic}: The Complete Guide for {audience}"
  intro_patterns:
    - "Everything {audience} need to know about {topic}, from the basics to advanced techniques."

location_based:
  title_patterns:
    - "Best {service} in {location} ({year})"
  intro_patterns:
    - "Looking for {service} in {location}? {product} brings {benefit} to every call."
"#;
