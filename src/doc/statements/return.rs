/*!
# `RETURN`

## Purpose
Returns from a `GOSUB`.

## Remarks
Without an outstanding `GOSUB` it is `RETURN WITHOUT GOSUB`.

## Example
```text
RETURN
7/0
```

*/
