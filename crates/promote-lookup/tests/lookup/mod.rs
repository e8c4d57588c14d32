mod ambiguity;
